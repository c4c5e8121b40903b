//! Single-sequence operators through the public chaining surface.

use std::cell::{Cell, RefCell};

use serde_json::{json, Value};
use lazyseq::{concat, empty, range, repeat, values, wrap, zip, Indexed, SeqError, Sequence};

// ============================================================================
// map / filter / inspect
// ============================================================================

#[test]
fn map_passes_positions() {
    let seq = values(vec!["a", "b", "c"]).map(|s, i| format!("{s}{i}"));
    assert_eq!(seq.to_vec(), vec!["a0", "b1", "c2"]);
}

#[test]
fn filter_sees_upstream_positions() {
    let seen = RefCell::new(Vec::new());
    let seq = values(vec![10, 11, 12, 13]).filter(|n, i| {
        seen.borrow_mut().push(i);
        n % 2 == 1
    });
    assert_eq!(seq.to_vec(), vec![11, 13]);
    assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
}

#[test]
fn inspect_runs_only_when_pulled() {
    let calls = Cell::new(0);
    let seq = range(0, None).inspect(|_, _| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
    assert_eq!(seq.take(3).to_vec(), vec![0, 1, 2]);
    assert_eq!(calls.get(), 3);
}

// ============================================================================
// take / skip
// ============================================================================

#[test]
fn take_on_infinite_range_terminates() {
    assert_eq!(range(0, None).take(3).to_vec(), vec![0, 1, 2]);
}

#[test]
fn take_never_pulls_past_budget() {
    let pulled = Cell::new(0);
    let seq = range(0, None)
        .inspect(|_, _| pulled.set(pulled.get() + 1))
        .take(2);
    seq.for_each(|_, _| {});
    assert_eq!(pulled.get(), 2);
}

#[test]
fn take_zero_is_empty() {
    assert!(range(0, None).take(0).is_empty());
}

#[test]
fn take_while_stops_at_first_failure() {
    let seq = values(vec![1, 2, 5, 1]).take_while(|n, _| *n < 3);
    assert_eq!(seq.to_vec(), vec![1, 2]);
}

#[test]
fn skip_then_take() {
    assert_eq!(range(0, None).skip(5).take(2).to_vec(), vec![5, 6]);
}

#[test]
fn skip_while_opens_once() {
    let seq = values(vec![1, 2, 5, 1, 7]).skip_while(|n, _| *n < 3);
    assert_eq!(seq.to_vec(), vec![5, 1, 7]);
}

// ============================================================================
// buffer / window
// ============================================================================

#[test]
fn buffer_last_chunk_is_short() {
    let chunks = range(1, Some(8)).buffer(3).unwrap();
    assert_eq!(chunks.to_vec(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
}

#[test]
fn window_of_three() {
    let windows = values(vec![1, 2, 3, 4, 5, 6]).window(3).unwrap();
    assert_eq!(
        windows.to_vec(),
        vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![4, 5, 6]]
    );
}

#[test]
fn window_longer_than_source_is_empty() {
    assert!(values(vec![1, 2]).window(3).unwrap().is_empty());
}

#[test]
fn zero_sizes_are_rejected() {
    assert!(matches!(
        values(vec![1]).buffer(0),
        Err(SeqError::InvalidSize { op: "buffer", size: 0 })
    ));
    let err = values(vec![1]).window(0).err().unwrap();
    assert_eq!(err.to_string(), "window size must be a positive integer, got 0");
}

// ============================================================================
// flatten / scan / dedup
// ============================================================================

#[test]
fn flatten_is_one_level_deep() {
    let seq = values(vec![vec![vec![1], vec![2]], vec![], vec![vec![3]]]).flatten();
    assert_eq!(seq.to_vec(), vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn flat_map_transforms_before_flattening() {
    let seq = values(vec![1, 3]).flat_map(|n, i| vec![n; i + 1]);
    assert_eq!(seq.to_vec(), vec![1, 3, 3]);
}

#[test]
fn scan_without_seed() {
    let seq = values(vec![3, 5, 1, 2, 2, 1]).scan(|x, y, _| x + y);
    assert_eq!(seq.to_vec(), vec![8, 9, 11, 13, 14]);
}

#[test]
fn scan_with_seed() {
    let seq = values(vec![3, 5]).scan_with(2, |x, y, _| x + y);
    assert_eq!(seq.to_vec(), vec![5, 10]);
}

#[test]
fn scan_on_infinite_source_is_lazy() {
    let triangular = range(1, None).scan(|acc, n, _| acc + n).take(4);
    assert_eq!(triangular.to_vec(), vec![3, 6, 10, 15]);
}

#[test]
fn consecutive_duplicates_collapse() {
    let seq = values(vec![1, 1, 2, 2, 2, 1, 3, 3]).filter_consecutive_duplicates();
    assert_eq!(seq.to_vec(), vec![1, 2, 1, 3]);
}

#[test]
fn remove_consecutive_duplicates_alias() {
    let seq = wrap("aabbbc".chars()).remove_consecutive_duplicates();
    assert_eq!(seq.to_vec(), vec!['a', 'b', 'c']);
}

#[test]
fn consecutive_duplicates_with_nan() {
    let seq = values(vec![f64::NAN, f64::NAN, 0.0, -0.0]).filter_consecutive_duplicates();
    let out = seq.to_vec();
    assert_eq!(out.len(), 3);
    assert!(out[0].is_nan());
    assert!(out[2].is_sign_negative());
}

#[test]
fn consecutive_duplicates_by_case_insensitive() {
    let seq = values(vec!["Bob", "BOB", "ann", "Ann", "bob"])
        .filter_consecutive_duplicates_by(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
    assert_eq!(seq.to_vec(), vec!["Bob", "ann", "bob"]);
}

#[test]
fn consecutive_duplicates_by_indexed() {
    // Drop an item only if it follows its predecessor directly upstream.
    let seq = values(vec![1, 1, 1, 2])
        .filter_consecutive_duplicates_by(Indexed(|a: &i32, b: &i32, ai: usize, bi: usize| {
            a == b && bi == ai + 1
        }));
    assert_eq!(seq.to_vec(), vec![1, 1, 2]);
}

// ============================================================================
// repeat / concat / zip
// ============================================================================

#[test]
fn repeat_sequence_counted() {
    let seq = values(vec![1, 2]).repeat(Some(3));
    assert_eq!(seq.to_vec(), vec![1, 2, 1, 2, 1, 2]);
}

#[test]
fn repeat_sequence_forever() {
    let seq = values(vec!['x', 'y']).repeat(None).take(5);
    assert_eq!(seq.to_vec(), vec!['x', 'y', 'x', 'y', 'x']);
}

#[test]
fn repeat_forever_over_empty_terminates() {
    assert!(empty::<i32>().repeat(None).is_empty());
}

#[test]
fn repeat_value_factory() {
    assert_eq!(repeat("hi", Some(2)).to_vec(), vec!["hi", "hi"]);
}

#[test]
fn concat_method_and_function_agree() {
    let a = values(vec![1, 2]);
    let b = values(vec![3]);
    let c = values(vec![4, 5]);
    let method = a.clone().concat(vec![b.clone(), c.clone()]);
    let function = concat(vec![a, b, c]);
    assert_eq!(method.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(method.to_vec(), function.to_vec());
}

#[test]
fn concat_boxed_pipelines() {
    let seq = concat(vec![
        range(0, None).take(2).boxed(),
        values(vec![10, 20]).map(|n, _| n + 1).boxed(),
    ]);
    assert_eq!(seq.to_vec(), vec![0, 1, 11, 21]);
}

#[test]
fn zip_pads_with_absent() {
    let seq = zip(vec![
        values(vec![json!(5)]),
        values(vec![json!(2), json!(9), json!(11)]),
        values(vec![json!(13), json!("bob")]),
    ]);
    let rows: Vec<Vec<Option<Value>>> = seq.to_vec();
    assert_eq!(
        rows,
        vec![
            vec![Some(json!(5)), Some(json!(2)), Some(json!(13))],
            vec![None, Some(json!(9)), Some(json!("bob"))],
            vec![None, Some(json!(11)), None],
        ]
    );
}

#[test]
fn zip_method_puts_self_first() {
    let seq = values(vec![1, 2]).zip(vec![values(vec![3])]);
    assert_eq!(seq.to_vec(), vec![vec![Some(1), Some(3)], vec![Some(2), None]]);
}

#[test]
fn zip_of_nothing_is_empty() {
    assert!(zip(Vec::<lazyseq::Values<i32>>::new()).is_empty());
}

// ============================================================================
// Re-entrancy
// ============================================================================

#[test]
fn nested_traversal_of_same_pipeline() {
    let seq = values(vec![1, 2, 3]).map(|n, _| n * 10);
    let pairs: Vec<(i32, i32)> = seq
        .iter()
        .flat_map(|a| seq.iter().map(move |b| (a, b)))
        .collect();
    assert_eq!(pairs.len(), 9);
    assert_eq!(pairs[0], (10, 10));
    assert_eq!(pairs[8], (30, 30));
}

#[test]
fn interleaved_cursors_do_not_share_state() {
    let seq = range(0, None).skip(1).take(3);
    let mut a = seq.cursor();
    let mut b = seq.cursor();
    assert_eq!(a.next(), Some(1));
    assert_eq!(b.next(), Some(1));
    assert_eq!(a.next(), Some(2));
    assert_eq!(a.next(), Some(3));
    assert_eq!(a.next(), None);
    assert_eq!(b.next(), Some(2));
}

#[test]
fn partial_consumption_is_cheap() {
    let pulled = Cell::new(0);
    let seq = range(0, None).inspect(|_, _| pulled.set(pulled.get() + 1));
    let mut cursor = seq.cursor();
    cursor.next();
    drop(cursor);
    assert_eq!(pulled.get(), 1);
}
