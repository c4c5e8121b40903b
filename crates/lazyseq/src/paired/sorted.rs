//! Merging and set algebra over two sorted sequences.
//!
//! Both inputs must already be sorted by the comparer in use. Apart from
//! [`merge`], which keeps duplicates, they are also expected to be free of
//! duplicates. Each step compares the current head of both sides and
//! advances one or both cursors; what gets emitted depends on the rule.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::rc::Rc;

use crate::sequence::Sequence;
use crate::strategy::{Comparer, NaturalOrder};

/// The combination rule applied to two sorted sequences.
///
/// | Op | lhs < rhs | lhs == rhs | lhs > rhs | one side left |
/// |----|-----------|------------|-----------|---------------|
/// | `Merge` | emit lhs | emit lhs, then rhs | emit rhs | emit it |
/// | `Union` | emit lhs | emit lhs once | emit rhs | emit it |
/// | `Intersection` | skip lhs | emit lhs once | skip rhs | stop |
/// | `SymmetricDifference` | emit lhs | skip both | emit rhs | emit it |
/// | `Difference` | emit lhs | skip both | skip rhs | emit lhs only |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SetOp {
    Merge,
    Union,
    Intersection,
    SymmetricDifference,
    Difference,
}

impl SetOp {
    /// Returns `true` if a left item with no counterpart is emitted.
    pub(crate) fn keeps_unmatched_lhs(self) -> bool {
        !matches!(self, SetOp::Intersection)
    }

    /// Returns `true` if a right item with no counterpart is emitted.
    pub(crate) fn keeps_unmatched_rhs(self) -> bool {
        matches!(
            self,
            SetOp::Merge | SetOp::Union | SetOp::SymmetricDifference
        )
    }
}

/// Two sorted sequences combined by a merge or set rule.
///
/// Created by [`merge`], [`set_union`], [`set_intersection`],
/// [`set_symmetric_difference`], [`set_difference`], their `_by` variants and
/// the matching [`Sequence`] methods.
pub struct SortedPair<L, R, C> {
    lhs: L,
    rhs: R,
    comparer: Rc<C>,
    op: SetOp,
}

impl<L, R, C> SortedPair<L, R, C> {
    pub(crate) fn new(lhs: L, rhs: R, comparer: C, op: SetOp) -> Self {
        SortedPair {
            lhs,
            rhs,
            comparer: Rc::new(comparer),
            op,
        }
    }
}

impl<L: Clone, R: Clone, C> Clone for SortedPair<L, R, C> {
    fn clone(&self) -> Self {
        SortedPair {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
            comparer: Rc::clone(&self.comparer),
            op: self.op,
        }
    }
}

impl<L, R, C> Sequence for SortedPair<L, R, C>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    C: Comparer<L::Item>,
{
    type Item = L::Item;
    type Cursor = SortedPairCursor<L::Cursor, R::Cursor, C>;

    fn cursor(&self) -> Self::Cursor {
        SortedPairCursor {
            lhs: self.lhs.cursor().peekable(),
            rhs: self.rhs.cursor().peekable(),
            lhs_index: 0,
            rhs_index: 0,
            comparer: Rc::clone(&self.comparer),
            op: self.op,
            rhs_tie_pending: false,
        }
    }
}

pub struct SortedPairCursor<L: Iterator, R: Iterator, C> {
    lhs: Peekable<L>,
    rhs: Peekable<R>,
    lhs_index: usize,
    rhs_index: usize,
    comparer: Rc<C>,
    op: SetOp,
    /// Set after a merge emitted the left half of a tie.
    rhs_tie_pending: bool,
}

impl<L: Iterator, R: Iterator, C> SortedPairCursor<L, R, C> {
    fn advance_lhs(&mut self) -> Option<L::Item> {
        self.lhs_index += 1;
        self.lhs.next()
    }

    fn advance_rhs(&mut self) -> Option<R::Item> {
        self.rhs_index += 1;
        self.rhs.next()
    }
}

impl<L, R, C> Iterator for SortedPairCursor<L, R, C>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    C: Comparer<L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<L::Item> {
        if self.rhs_tie_pending {
            self.rhs_tie_pending = false;
            return self.advance_rhs();
        }
        loop {
            let ordering = match (self.lhs.peek(), self.rhs.peek()) {
                (None, None) => return None,
                (Some(_), None) => {
                    if !self.op.keeps_unmatched_lhs() {
                        return None;
                    }
                    return self.advance_lhs();
                }
                (None, Some(_)) => {
                    if !self.op.keeps_unmatched_rhs() {
                        return None;
                    }
                    return self.advance_rhs();
                }
                (Some(l), Some(r)) => self.comparer.compare(l, r, self.lhs_index, self.rhs_index),
            };
            match ordering {
                Ordering::Less => {
                    let item = self.advance_lhs();
                    if self.op.keeps_unmatched_lhs() {
                        return item;
                    }
                }
                Ordering::Greater => {
                    let item = self.advance_rhs();
                    if self.op.keeps_unmatched_rhs() {
                        return item;
                    }
                }
                Ordering::Equal => match self.op {
                    SetOp::Merge => {
                        self.rhs_tie_pending = true;
                        return self.advance_lhs();
                    }
                    SetOp::Union | SetOp::Intersection => {
                        self.advance_rhs();
                        return self.advance_lhs();
                    }
                    SetOp::SymmetricDifference | SetOp::Difference => {
                        self.advance_lhs();
                        self.advance_rhs();
                    }
                },
            }
        }
    }
}

/// Merges two sorted sequences into one sorted sequence, keeping duplicates.
/// On a tie the left item comes first.
pub fn merge<L, R>(lhs: L, rhs: R) -> SortedPair<L, R, NaturalOrder>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: PartialOrd,
{
    merge_by(lhs, rhs, NaturalOrder)
}

/// [`merge`] with a custom comparer.
pub fn merge_by<L, R, C>(lhs: L, rhs: R, comparer: C) -> SortedPair<L, R, C>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    C: Comparer<L::Item>,
{
    SortedPair::new(lhs, rhs, comparer, SetOp::Merge)
}

/// Items present in either sorted sequence, each emitted once.
pub fn set_union<L, R>(lhs: L, rhs: R) -> SortedPair<L, R, NaturalOrder>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: PartialOrd,
{
    set_union_by(lhs, rhs, NaturalOrder)
}

/// [`set_union`] with a custom comparer.
pub fn set_union_by<L, R, C>(lhs: L, rhs: R, comparer: C) -> SortedPair<L, R, C>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    C: Comparer<L::Item>,
{
    SortedPair::new(lhs, rhs, comparer, SetOp::Union)
}

/// Items present in both sorted sequences.
pub fn set_intersection<L, R>(lhs: L, rhs: R) -> SortedPair<L, R, NaturalOrder>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: PartialOrd,
{
    set_intersection_by(lhs, rhs, NaturalOrder)
}

/// [`set_intersection`] with a custom comparer.
pub fn set_intersection_by<L, R, C>(lhs: L, rhs: R, comparer: C) -> SortedPair<L, R, C>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    C: Comparer<L::Item>,
{
    SortedPair::new(lhs, rhs, comparer, SetOp::Intersection)
}

/// Items present in exactly one of the sorted sequences.
pub fn set_symmetric_difference<L, R>(lhs: L, rhs: R) -> SortedPair<L, R, NaturalOrder>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: PartialOrd,
{
    set_symmetric_difference_by(lhs, rhs, NaturalOrder)
}

/// [`set_symmetric_difference`] with a custom comparer.
pub fn set_symmetric_difference_by<L, R, C>(lhs: L, rhs: R, comparer: C) -> SortedPair<L, R, C>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    C: Comparer<L::Item>,
{
    SortedPair::new(lhs, rhs, comparer, SetOp::SymmetricDifference)
}

/// Items of the left sorted sequence that do not appear in the right one.
pub fn set_difference<L, R>(lhs: L, rhs: R) -> SortedPair<L, R, NaturalOrder>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    L::Item: PartialOrd,
{
    set_difference_by(lhs, rhs, NaturalOrder)
}

/// [`set_difference`] with a custom comparer.
pub fn set_difference_by<L, R, C>(lhs: L, rhs: R, comparer: C) -> SortedPair<L, R, C>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
    C: Comparer<L::Item>,
{
    SortedPair::new(lhs, rhs, comparer, SetOp::Difference)
}
