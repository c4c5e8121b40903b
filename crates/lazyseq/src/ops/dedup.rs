//! Collapsing of consecutive duplicates. Created by
//! [`Sequence::filter_consecutive_duplicates`] and its `_by` variant.

use std::rc::Rc;

use crate::sequence::Sequence;
use crate::strategy::Equality;

/// Yields the first item, then each item that differs from the last yielded
/// one. Non-adjacent repeats are kept.
pub struct FilterConsecutiveDuplicates<S, E> {
    source: S,
    equals: Rc<E>,
}

impl<S, E> FilterConsecutiveDuplicates<S, E> {
    pub(crate) fn new(source: S, equals: E) -> Self {
        FilterConsecutiveDuplicates {
            source,
            equals: Rc::new(equals),
        }
    }
}

impl<S: Clone, E> Clone for FilterConsecutiveDuplicates<S, E> {
    fn clone(&self) -> Self {
        FilterConsecutiveDuplicates {
            source: self.source.clone(),
            equals: Rc::clone(&self.equals),
        }
    }
}

impl<S, E> Sequence for FilterConsecutiveDuplicates<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: Equality<S::Item>,
{
    type Item = S::Item;
    type Cursor = DedupCursor<S::Cursor, E>;

    fn cursor(&self) -> Self::Cursor {
        DedupCursor {
            inner: self.source.cursor(),
            equals: Rc::clone(&self.equals),
            last: None,
            index: 0,
        }
    }
}

pub struct DedupCursor<C: Iterator, E> {
    inner: C,
    equals: Rc<E>,
    /// Last yielded value and its upstream index.
    last: Option<(C::Item, usize)>,
    index: usize,
}

impl<C, E> Iterator for DedupCursor<C, E>
where
    C: Iterator,
    C::Item: Clone,
    E: Equality<C::Item>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            let item = self.inner.next()?;
            let index = self.index;
            self.index += 1;
            let duplicate = match &self.last {
                Some((last, last_index)) => self.equals.equals(last, &item, *last_index, index),
                None => false,
            };
            if !duplicate {
                self.last = Some((item.clone(), index));
                return Some(item);
            }
        }
    }
}
