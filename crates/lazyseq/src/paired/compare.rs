//! Lexicographic comparison, equality and mismatch search over two
//! sequences. All three walk both cursors in lockstep and stop at the first
//! position that decides the answer.

use std::cmp::Ordering;

use crate::result::MismatchResult;
use crate::sequence::Sequence;
use crate::strategy::{Comparer, Equality, IdentityEquals, NaturalOrder, SameValue};

/// Lexicographic three-way comparison using [`NaturalOrder`].
///
/// A sequence that is a proper prefix of the other compares `Less`.
pub fn compare<L, R>(lhs: L, rhs: R) -> Ordering
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: PartialOrd,
{
    compare_by(lhs, rhs, NaturalOrder)
}

/// [`compare`] with a custom comparer.
pub fn compare_by<L, R, C>(lhs: L, rhs: R, comparer: C) -> Ordering
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    C: Comparer<L::Item>,
{
    let mut lhs = lhs.cursor();
    let mut rhs = rhs.cursor();
    let mut index = 0;
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = comparer.compare(&l, &r, index, index);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
        index += 1;
    }
}

/// `true` if both sequences have the same length and pairwise equal items
/// under [`IdentityEquals`].
pub fn equal<L, R>(lhs: L, rhs: R) -> bool
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: SameValue,
{
    equal_by(lhs, rhs, IdentityEquals)
}

/// [`equal`] with a custom equality.
pub fn equal_by<L, R, E>(lhs: L, rhs: R, equals: E) -> bool
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    E: Equality<L::Item>,
{
    find_mismatch_by(lhs, rhs, equals).is_none()
}

/// The first position where the sequences differ under [`IdentityEquals`],
/// or `None` if they are equal (including both empty).
pub fn find_mismatch<L, R>(lhs: L, rhs: R) -> Option<MismatchResult<L::Item>>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: SameValue,
{
    find_mismatch_by(lhs, rhs, IdentityEquals)
}

/// [`find_mismatch`] with a custom equality.
pub fn find_mismatch_by<L, R, E>(lhs: L, rhs: R, equals: E) -> Option<MismatchResult<L::Item>>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    E: Equality<L::Item>,
{
    let mut lhs = lhs.cursor();
    let mut rhs = rhs.cursor();
    let mut index = 0;
    loop {
        let (lhs_value, rhs_value) = match (lhs.next(), rhs.next()) {
            (None, None) => return None,
            (Some(l), Some(r)) if equals.equals(&l, &r, index, index) => {
                index += 1;
                continue;
            }
            pair => pair,
        };
        return Some(MismatchResult {
            lhs_value,
            rhs_value,
            index,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, range, values};

    #[test]
    fn prefix_is_less() {
        assert_eq!(compare(values(vec![1, 2]), values(vec![1, 2, 3])), Ordering::Less);
        assert_eq!(compare(values(vec![1, 2, 3]), values(vec![1, 2])), Ordering::Greater);
    }

    #[test]
    fn first_difference_decides() {
        assert_eq!(compare(values(vec![1, 9]), values(vec![2, 0])), Ordering::Less);
    }

    #[test]
    fn compare_stops_on_infinite_inputs() {
        assert_eq!(compare(range(0, None), range(1, None)), Ordering::Less);
    }

    #[test]
    fn equal_length_mismatch() {
        assert!(!equal(values(vec![1, 2]), values(vec![1])));
        assert!(equal(empty::<i32>(), empty::<i32>()));
    }

    #[test]
    fn equal_uses_same_value() {
        assert!(equal(values(vec![f64::NAN]), values(vec![f64::NAN])));
        assert!(!equal(values(vec![0.0]), values(vec![-0.0])));
    }

    #[test]
    fn mismatch_reports_both_values() {
        let mismatch = find_mismatch(values(vec![1, 2, 3]), values(vec![1, 5, 3])).unwrap();
        assert_eq!(
            mismatch,
            MismatchResult {
                lhs_value: Some(2),
                rhs_value: Some(5),
                index: 1
            }
        );
    }

    #[test]
    fn mismatch_with_shorter_side() {
        let mismatch = find_mismatch(values(vec![1]), values(vec![1, 4])).unwrap();
        assert_eq!(mismatch.lhs_value, None);
        assert_eq!(mismatch.rhs_value, Some(4));
        assert_eq!(mismatch.index, 1);
    }

    #[test]
    fn no_mismatch_when_both_empty() {
        assert!(find_mismatch(empty::<i32>(), empty::<i32>()).is_none());
    }
}
