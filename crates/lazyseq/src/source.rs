//! Sequence sources: the ways to start a pipeline.
//!
//! The kind of source is fixed by the constructor that builds it, so no
//! dispatch happens per pull:
//!
//! | Constructor | Source | Cursor |
//! |-------------|--------|--------|
//! | [`wrap`] | any `IntoIterator + Clone` container | iterates a fresh clone |
//! | [`from_fn`] | a zero-argument factory | whatever the factory returns |
//! | [`empty`] | nothing | always ended |
//! | [`values`] | a shared slice | clones of the elements |
//! | [`range`] | an integer interval | counts upward |
//! | [`repeat`] | a single value | the value, `count` times |

use std::marker::PhantomData;
use std::rc::Rc;

use crate::sequence::Sequence;

/// Wraps a container. Every cursor iterates its own clone of the container,
/// so containers that are cheap to clone (slices, `str::chars()`, ranges,
/// borrowed iterators) make cheap sequences.
///
/// ```
/// use std::collections::BTreeMap;
/// use lazyseq::{wrap, Sequence};
///
/// assert_eq!(wrap("bob".chars()).to_vec(), vec!['b', 'o', 'b']);
///
/// let ages = BTreeMap::from([("ann", 31), ("bob", 27)]);
/// assert_eq!(wrap(&ages).count(), 2);
/// ```
pub fn wrap<C>(container: C) -> Wrap<C>
where
    C: IntoIterator + Clone,
{
    Wrap { container }
}

/// Builds a sequence from a cursor factory. The factory is invoked once per
/// cursor; the sequence is restartable exactly when the factory is.
///
/// ```
/// use lazyseq::{from_fn, Sequence};
///
/// let powers = from_fn(|| std::iter::successors(Some(1u32), |n| n.checked_mul(2)));
/// assert_eq!(powers.take(4).to_vec(), vec![1, 2, 4, 8]);
/// ```
pub fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn {
        factory: Rc::new(factory),
    }
}

/// A sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _item: PhantomData,
    }
}

/// A sequence over the given items, in order.
pub fn values<T, I>(items: I) -> Values<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    Values {
        items: items.into_iter().collect(),
    }
}

/// Consecutive integers from `start` (inclusive) to `end` (exclusive).
///
/// With `end` of `None` the sequence is infinite; bound it with
/// [`Sequence::take`]. An `end` at or below `start` yields nothing.
pub fn range(start: i64, end: Option<i64>) -> Range {
    Range { start, end }
}

/// `value` repeated `count` times, or forever when `count` is `None`.
pub fn repeat<T: Clone>(value: T, count: Option<usize>) -> RepeatValue<T> {
    RepeatValue { value, count }
}

/// Created by [`wrap`].
#[derive(Debug, Clone)]
pub struct Wrap<C> {
    container: C,
}

impl<C> Sequence for Wrap<C>
where
    C: IntoIterator + Clone,
{
    type Item = C::Item;
    type Cursor = C::IntoIter;

    fn cursor(&self) -> Self::Cursor {
        self.container.clone().into_iter()
    }
}

/// Created by [`from_fn`].
pub struct FromFn<F> {
    factory: Rc<F>,
}

impl<F> Clone for FromFn<F> {
    fn clone(&self) -> Self {
        FromFn {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor = I::IntoIter;

    fn cursor(&self) -> Self::Cursor {
        (self.factory)().into_iter()
    }
}

/// Created by [`empty`].
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> std::fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = std::iter::Empty<T>;

    fn cursor(&self) -> Self::Cursor {
        std::iter::empty()
    }
}

/// Created by [`values`].
#[derive(Debug)]
pub struct Values<T> {
    items: Rc<[T]>,
}

impl<T> Clone for Values<T> {
    fn clone(&self) -> Self {
        Values {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: Clone> Sequence for Values<T> {
    type Item = T;
    type Cursor = ValuesCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        ValuesCursor {
            items: Rc::clone(&self.items),
            position: 0,
        }
    }
}

pub struct ValuesCursor<T> {
    items: Rc<[T]>,
    position: usize,
}

impl<T: Clone> Iterator for ValuesCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.position;
        (left, Some(left))
    }
}

/// Created by [`range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    end: Option<i64>,
}

impl Sequence for Range {
    type Item = i64;
    type Cursor = RangeCursor;

    fn cursor(&self) -> Self::Cursor {
        RangeCursor {
            next: Some(self.start),
            end: self.end,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RangeCursor {
    next: Option<i64>,
    end: Option<i64>,
}

impl Iterator for RangeCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        if self.end.is_some_and(|end| current >= end) {
            self.next = None;
            return None;
        }
        self.next = current.checked_add(1);
        Some(current)
    }
}

/// Created by [`repeat`].
#[derive(Debug, Clone)]
pub struct RepeatValue<T> {
    value: T,
    count: Option<usize>,
}

impl<T: Clone> Sequence for RepeatValue<T> {
    type Item = T;
    type Cursor = RepeatValueCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        RepeatValueCursor {
            value: self.value.clone(),
            remaining: self.count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepeatValueCursor<T> {
    value: T,
    remaining: Option<usize>,
}

impl<T: Clone> Iterator for RepeatValueCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.remaining {
            Some(0) => None,
            Some(n) => {
                self.remaining = Some(n - 1);
                Some(self.value.clone())
            }
            None => Some(self.value.clone()),
        }
    }
}
