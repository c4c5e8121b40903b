//! Paired algorithms: sorted merging, set algebra, interleaving and
//! lockstep comparison.

use std::cell::RefCell;
use std::cmp::Ordering;

use lazyseq::{
    compare, compare_by, equal, equal_by, find_mismatch, interleave, merge, merge_by, range,
    repeat, set_difference, set_intersection, set_symmetric_difference, set_union, set_union_by,
    values, Either, Indexed, MismatchResult, NaturalOrder, Reverse, Sequence,
};

// ============================================================================
// merge
// ============================================================================

#[test]
fn merge_disjoint_runs() {
    let seq = merge(values(vec![3, 5]), values(vec![7, 9, 10]));
    assert_eq!(seq.to_vec(), vec![3, 5, 7, 9, 10]);
}

#[test]
fn merge_keeps_both_sides_of_a_tie() {
    let seq = values(vec![(1, 'l'), (2, 'l')])
        .merge_by(values(vec![(1, 'r'), (3, 'r')]), |a: &(i32, char), b: &(i32, char)| {
            a.0.cmp(&b.0)
        });
    assert_eq!(seq.to_vec(), vec![(1, 'l'), (1, 'r'), (2, 'l'), (3, 'r')]);
}

#[test]
fn merge_descending_with_reverse() {
    let seq = merge_by(values(vec![9, 4, 1]), values(vec![8, 2]), Reverse(NaturalOrder));
    assert_eq!(seq.to_vec(), vec![9, 8, 4, 2, 1]);
}

#[test]
fn merge_infinite_inputs_is_lazy() {
    let evens = range(0, None).map(|n, _| n * 2);
    let odds = range(0, None).map(|n, _| n * 2 + 1);
    assert_eq!(merge(evens, odds).take(5).to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn comparer_sees_positions() {
    let seen = RefCell::new(Vec::new());
    let seq = set_union_by(
        values(vec![1, 2]),
        values(vec![2, 3]),
        Indexed(|a: &i32, b: &i32, li: usize, ri: usize| {
            seen.borrow_mut().push((li, ri));
            a.cmp(b)
        }),
    );
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    assert_eq!(*seen.borrow(), vec![(0, 0), (1, 0)]);
}

// ============================================================================
// set algebra
// ============================================================================

#[test]
fn symmetric_difference_of_prefix() {
    let seq = set_symmetric_difference(values(vec![1, 2]), values(vec![1, 2, 3, 4]));
    assert_eq!(seq.to_vec(), vec![3, 4]);
}

#[test]
fn union_emits_shared_items_once() {
    let seq = set_union(values(vec![1, 3, 5]), values(vec![2, 3, 4, 6]));
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn union_by_key() {
    let seq = set_union_by(
        values(vec!["ant", "cow"]),
        values(vec!["Ant", "bee"]),
        |a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase()),
    );
    assert_eq!(seq.to_vec(), vec!["ant", "bee", "cow"]);
}

#[test]
fn intersection_stops_when_either_side_ends() {
    let seq = set_intersection(values(vec![2, 4, 6, 8]), range(0, None).map(|n, _| n * 4));
    assert_eq!(seq.to_vec(), vec![4, 8]);
}

#[test]
fn difference_drops_rhs_items() {
    let seq = set_difference(values(vec![1, 2, 3, 4, 5]), values(vec![2, 4, 9]));
    assert_eq!(seq.to_vec(), vec![1, 3, 5]);
}

#[test]
fn difference_with_empty_rhs() {
    let seq = values(vec![1, 2]).set_difference(values(Vec::<i32>::new()));
    assert_eq!(seq.to_vec(), vec![1, 2]);
}

// ============================================================================
// interleave
// ============================================================================

#[test]
fn interleave_with_short_right() {
    let seq = interleave(values(vec![1, 2, 3]), values(vec!['a']));
    assert_eq!(
        seq.to_vec(),
        vec![Either::Left(1), Either::Right('a'), Either::Left(2)]
    );
}

#[test]
fn interleave_as_separator() {
    let joined: String = values(vec!["a", "b", "c"])
        .interleave(repeat(", ", None))
        .iter()
        .map(|part| part.into_inner())
        .collect();
    assert_eq!(joined, "a, b, c");
}

// ============================================================================
// compare / equal / find_mismatch
// ============================================================================

#[test]
fn compare_is_lexicographic() {
    assert_eq!(compare(values(vec![1, 2, 3]), values(vec![1, 2, 4])), Ordering::Less);
    assert_eq!(compare(values(vec![2]), values(vec![1, 9])), Ordering::Greater);
    assert_eq!(compare(values(Vec::<i32>::new()), values(vec![1])), Ordering::Less);
}

#[test]
fn compare_by_reversed() {
    let ordering = compare_by(values(vec![1]), values(vec![2]), Reverse(NaturalOrder));
    assert_eq!(ordering, Ordering::Greater);
}

#[test]
fn method_forms_borrow_the_receiver() {
    let seq = values(vec![1, 2, 3]);
    assert_eq!(seq.compare(&seq), Ordering::Equal);
    assert!(seq.equal(&seq));
    assert!(seq.find_mismatch(&seq).is_none());
    // Still usable afterwards.
    assert_eq!(seq.count(), 3);
}

#[test]
fn equal_by_custom_equality() {
    let same_parity = |a: &i32, b: &i32| a % 2 == b % 2;
    assert!(equal_by(values(vec![1, 2]), values(vec![3, 4]), same_parity));
    assert!(!equal(values(vec![1, 2]), values(vec![3, 4])));
}

#[test]
fn mismatch_at_first_difference() {
    let mismatch = find_mismatch(values(vec!['a', 'b', 'c']), values(vec!['a', 'x'])).unwrap();
    assert_eq!(
        mismatch,
        MismatchResult {
            lhs_value: Some('b'),
            rhs_value: Some('x'),
            index: 1,
        }
    );
}

#[test]
fn mismatch_when_lhs_is_longer() {
    let mismatch = values(vec![1, 2]).find_mismatch(values(vec![1])).unwrap();
    assert_eq!(mismatch.lhs_value, Some(2));
    assert_eq!(mismatch.rhs_value, None);
    assert_eq!(mismatch.index, 1);
}
