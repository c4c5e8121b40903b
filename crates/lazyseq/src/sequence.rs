//! The [`Sequence`] trait: a restartable, lazily evaluated source of items.
//!
//! A sequence is a cursor factory. Calling [`Sequence::cursor`] produces a
//! fresh [`Iterator`] that owns its traversal state, so a sequence can be
//! traversed any number of times, including by several cursors at once.
//! Nothing is computed until a cursor is pulled.
//!
//! Operators (`map`, `filter`, `take`, ...) consume the sequence and return a
//! new one wrapping it. Terminal operations (`to_vec`, `count`, `first`, ...)
//! borrow the sequence, open a cursor, and drain as much of it as they need.
//!
//! ```
//! use lazyseq::{range, Sequence};
//!
//! let squares = range(0, None)
//!     .map(|n, _| n * n)
//!     .filter(|n, _| n % 2 == 1)
//!     .take(3);
//!
//! assert_eq!(squares.to_vec(), vec![1, 9, 25]);
//! // Restartable: a second traversal starts over.
//! assert_eq!(squares.first().map(|found| found.value), Some(1));
//! ```

use std::cmp::Ordering;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::Result;
use crate::ops::{
    identity, Buffer, Concat, FilterConsecutiveDuplicates, Filter, FlatMap, Inspect, Map, Repeat,
    Scan, Skip, SkipWhile, Take, TakeWhile, Window, Zip,
};
use crate::paired::{Interleave, SetOp, SortedPair};
use crate::result::{FindResult, MinmaxResult, MismatchResult};
use crate::strategy::{Comparer, Equality, IdentityEquals, NaturalOrder, Reverse, SameValue};

/// A lazily evaluated, restartable sequence.
///
/// Implementors only provide [`cursor`](Sequence::cursor); every operator and
/// terminal operation is built on it.
pub trait Sequence {
    /// The type of the elements.
    type Item;

    /// The traversal state produced by [`cursor`](Sequence::cursor).
    type Cursor: Iterator<Item = Self::Item>;

    /// Opens a fresh traversal.
    ///
    /// Cursors never share state with each other or with the sequence.
    fn cursor(&self) -> Self::Cursor;

    /// Alias for [`cursor`](Sequence::cursor), for use in `for` loops.
    fn iter(&self) -> Self::Cursor {
        self.cursor()
    }

    /// Erases the concrete type of this sequence.
    ///
    /// Useful to pass differently built pipelines with the same item type to
    /// [`concat`](crate::concat) or [`zip`](crate::zip).
    fn boxed<'a>(self) -> BoxSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
        Self::Cursor: 'a,
    {
        BoxSeq {
            factory: Rc::new(move || {
                Box::new(self.cursor()) as Box<dyn Iterator<Item = Self::Item> + 'a>
            }),
        }
    }

    // ========================================================================
    // Single-sequence operators
    // ========================================================================

    /// Transforms every item. The transform receives the item and its
    /// position.
    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> U,
    {
        Map::new(self, transform)
    }

    /// Keeps the items for which `predicate` returns `true`. The predicate
    /// sees each item's upstream position.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields at most `count` items and never pulls more than that from
    /// upstream.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Yields items until `predicate` first returns `false`.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Discards the first `count` items.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Discards items until `predicate` first returns `false`, then passes
    /// every remaining item without calling `predicate` again.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Calls `process` on each item as it passes through.
    #[doc(alias = "do")]
    #[doc(alias = "tap")]
    fn inspect<F>(self, process: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item, usize),
    {
        Inspect::new(self, process)
    }

    /// Partitions the items into `Vec`s of `size`; the last one may be
    /// shorter.
    ///
    /// Fails with [`SeqError::InvalidSize`](crate::SeqError::InvalidSize) if
    /// `size` is zero.
    fn buffer(self, size: usize) -> Result<Buffer<Self>>
    where
        Self: Sized,
    {
        Buffer::new(self, size)
    }

    /// Sliding window over the last `size` items.
    ///
    /// Fails with [`SeqError::InvalidSize`](crate::SeqError::InvalidSize) if
    /// `size` is zero.
    fn window(self, size: usize) -> Result<Window<Self>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Window::new(self, size)
    }

    /// Yields the elements of each item, one level deep.
    #[allow(clippy::type_complexity)]
    fn flatten(self) -> FlatMap<Self, fn(Self::Item, usize) -> Self::Item>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        FlatMap::new(self, identity as fn(Self::Item, usize) -> Self::Item)
    }

    /// Transforms each item into an iterable and yields its elements.
    fn flat_map<I, F>(self, transform: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> I,
        I: IntoIterator,
    {
        FlatMap::new(self, transform)
    }

    /// Drops items equal (under [`IdentityEquals`]) to the last yielded item.
    #[doc(alias = "remove_consecutive_duplicates")]
    fn filter_consecutive_duplicates(self) -> FilterConsecutiveDuplicates<Self, IdentityEquals>
    where
        Self: Sized,
        Self::Item: Clone + SameValue,
    {
        FilterConsecutiveDuplicates::new(self, IdentityEquals)
    }

    /// [`filter_consecutive_duplicates`](Sequence::filter_consecutive_duplicates)
    /// with a custom equality. It is called with the last yielded item and
    /// the candidate, and their positions.
    fn filter_consecutive_duplicates_by<E>(self, equals: E) -> FilterConsecutiveDuplicates<Self, E>
    where
        Self: Sized,
        Self::Item: Clone,
        E: Equality<Self::Item>,
    {
        FilterConsecutiveDuplicates::new(self, equals)
    }

    /// Same as [`filter_consecutive_duplicates`](Sequence::filter_consecutive_duplicates).
    fn remove_consecutive_duplicates(self) -> FilterConsecutiveDuplicates<Self, IdentityEquals>
    where
        Self: Sized,
        Self::Item: Clone + SameValue,
    {
        self.filter_consecutive_duplicates()
    }

    /// Running accumulation seeded by the first item, which is not yielded
    /// on its own.
    ///
    /// ```
    /// use lazyseq::{values, Sequence};
    ///
    /// let sums = values(vec![3, 5, 1]).scan(|acc, x, _| acc + x);
    /// assert_eq!(sums.to_vec(), vec![8, 9]);
    /// ```
    fn scan<F>(self, combine: F) -> Scan<Self, F, Self::Item>
    where
        Self: Sized,
        F: Fn(Self::Item, Self::Item, usize) -> Self::Item,
        Self::Item: Clone,
    {
        Scan::unseeded(self, combine)
    }

    /// Running accumulation starting from `seed`; every item yields a
    /// result.
    ///
    /// ```
    /// use lazyseq::{values, Sequence};
    ///
    /// let sums = values(vec![3, 5]).scan_with(2, |acc, x, _| acc + x);
    /// assert_eq!(sums.to_vec(), vec![5, 10]);
    /// ```
    fn scan_with<U, F>(self, seed: U, combine: F) -> Scan<Self, F, U>
    where
        Self: Sized,
        F: Fn(U, Self::Item, usize) -> U,
        U: Clone,
    {
        Scan::seeded(self, seed, combine)
    }

    /// Replays the whole sequence `count` times, or forever for `None`.
    fn repeat(self, count: Option<usize>) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat::new(self, count)
    }

    /// This sequence followed by each of `others`.
    fn concat<I>(self, others: I) -> Concat<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        crate::ops::concat(std::iter::once(self).chain(others))
    }

    /// Rows of this sequence zipped with each of `others`, see
    /// [`zip`](crate::zip).
    fn zip<I>(self, others: I) -> Zip<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        crate::ops::zip(std::iter::once(self).chain(others))
    }

    // ========================================================================
    // Paired operators
    // ========================================================================

    /// See [`merge`](crate::merge).
    fn merge<R>(self, other: R) -> SortedPair<Self, R, NaturalOrder>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        Self::Item: PartialOrd,
    {
        SortedPair::new(self, other, NaturalOrder, SetOp::Merge)
    }

    /// See [`merge_by`](crate::merge_by).
    fn merge_by<R, C>(self, other: R, comparer: C) -> SortedPair<Self, R, C>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        C: Comparer<Self::Item>,
    {
        SortedPair::new(self, other, comparer, SetOp::Merge)
    }

    /// See [`set_union`](crate::set_union).
    fn set_union<R>(self, other: R) -> SortedPair<Self, R, NaturalOrder>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        Self::Item: PartialOrd,
    {
        SortedPair::new(self, other, NaturalOrder, SetOp::Union)
    }

    /// See [`set_union_by`](crate::set_union_by).
    fn set_union_by<R, C>(self, other: R, comparer: C) -> SortedPair<Self, R, C>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        C: Comparer<Self::Item>,
    {
        SortedPair::new(self, other, comparer, SetOp::Union)
    }

    /// See [`set_intersection`](crate::set_intersection).
    fn set_intersection<R>(self, other: R) -> SortedPair<Self, R, NaturalOrder>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        Self::Item: PartialOrd,
    {
        SortedPair::new(self, other, NaturalOrder, SetOp::Intersection)
    }

    /// See [`set_intersection_by`](crate::set_intersection_by).
    fn set_intersection_by<R, C>(self, other: R, comparer: C) -> SortedPair<Self, R, C>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        C: Comparer<Self::Item>,
    {
        SortedPair::new(self, other, comparer, SetOp::Intersection)
    }

    /// See [`set_symmetric_difference`](crate::set_symmetric_difference).
    fn set_symmetric_difference<R>(self, other: R) -> SortedPair<Self, R, NaturalOrder>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        Self::Item: PartialOrd,
    {
        SortedPair::new(self, other, NaturalOrder, SetOp::SymmetricDifference)
    }

    /// See [`set_symmetric_difference_by`](crate::set_symmetric_difference_by).
    fn set_symmetric_difference_by<R, C>(self, other: R, comparer: C) -> SortedPair<Self, R, C>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        C: Comparer<Self::Item>,
    {
        SortedPair::new(self, other, comparer, SetOp::SymmetricDifference)
    }

    /// See [`set_difference`](crate::set_difference).
    fn set_difference<R>(self, other: R) -> SortedPair<Self, R, NaturalOrder>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        Self::Item: PartialOrd,
    {
        SortedPair::new(self, other, NaturalOrder, SetOp::Difference)
    }

    /// See [`set_difference_by`](crate::set_difference_by).
    fn set_difference_by<R, C>(self, other: R, comparer: C) -> SortedPair<Self, R, C>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
        C: Comparer<Self::Item>,
    {
        SortedPair::new(self, other, comparer, SetOp::Difference)
    }

    /// See [`interleave`](crate::interleave).
    fn interleave<R>(self, other: R) -> Interleave<Self, R>
    where
        Self: Sized,
        R: Sequence,
    {
        crate::paired::interleave(self, other)
    }

    // ========================================================================
    // Terminal operations
    // ========================================================================

    /// Calls `process` with every item and its position.
    fn for_each<F>(&self, mut process: F)
    where
        F: FnMut(Self::Item, usize),
    {
        for (index, item) in self.cursor().enumerate() {
            process(item, index);
        }
    }

    /// Number of items. Drains the sequence.
    #[doc(alias = "length")]
    fn count(&self) -> usize {
        self.cursor().count()
    }

    /// `true` if the sequence has no items. Pulls at most one item.
    fn is_empty(&self) -> bool {
        self.cursor().next().is_none()
    }

    /// The first item.
    fn first(&self) -> Option<FindResult<Self::Item>> {
        self.cursor().next().map(|value| FindResult::new(value, 0))
    }

    /// The last item. Drains the sequence.
    fn last(&self) -> Option<FindResult<Self::Item>> {
        self.cursor()
            .enumerate()
            .last()
            .map(|(index, value)| FindResult::new(value, index))
    }

    /// The item at `index`, if the sequence is that long.
    fn at(&self, index: usize) -> Option<FindResult<Self::Item>> {
        self.cursor()
            .nth(index)
            .map(|value| FindResult::new(value, index))
    }

    /// The first item for which `predicate` returns `true`.
    fn find<P>(&self, mut predicate: P) -> Option<FindResult<Self::Item>>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        self.cursor()
            .enumerate()
            .find(|(index, value)| predicate(value, *index))
            .map(|(index, value)| FindResult::new(value, index))
    }

    /// `true` if `predicate` holds for every item; stops at the first
    /// failure.
    fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        self.cursor()
            .enumerate()
            .all(|(index, value)| predicate(&value, index))
    }

    /// `true` if `predicate` holds for some item; stops at the first
    /// success.
    fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        self.cursor()
            .enumerate()
            .any(|(index, value)| predicate(&value, index))
    }

    /// The smallest item under [`NaturalOrder`]; the earliest one on ties.
    fn min(&self) -> Option<FindResult<Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        self.min_by(NaturalOrder)
    }

    /// The smallest item under `comparer`; the earliest one on ties.
    fn min_by<C>(&self, comparer: C) -> Option<FindResult<Self::Item>>
    where
        C: Comparer<Self::Item>,
    {
        let mut cursor = self.cursor().enumerate();
        let (mut min_index, mut min) = cursor.next()?;
        for (index, item) in cursor {
            if comparer.compare(&min, &item, min_index, index) == Ordering::Greater {
                min = item;
                min_index = index;
            }
        }
        Some(FindResult::new(min, min_index))
    }

    /// The largest item under [`NaturalOrder`]; the earliest one on ties.
    fn max(&self) -> Option<FindResult<Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        self.min_by(Reverse(NaturalOrder))
    }

    /// The largest item under `comparer`; the earliest one on ties.
    fn max_by<C>(&self, comparer: C) -> Option<FindResult<Self::Item>>
    where
        C: Comparer<Self::Item>,
    {
        self.min_by(Reverse(comparer))
    }

    /// Both extremes in a single pass.
    fn minmax(&self) -> Option<MinmaxResult<Self::Item>>
    where
        Self::Item: PartialOrd + Clone,
    {
        self.minmax_by(NaturalOrder)
    }

    /// [`minmax`](Sequence::minmax) with a custom comparer.
    fn minmax_by<C>(&self, comparer: C) -> Option<MinmaxResult<Self::Item>>
    where
        C: Comparer<Self::Item>,
        Self::Item: Clone,
    {
        let mut cursor = self.cursor().enumerate();
        let (index, first) = cursor.next()?;
        let mut min = FindResult::new(first.clone(), index);
        let mut max = FindResult::new(first, index);
        for (index, item) in cursor {
            if comparer.compare(&min.value, &item, min.index, index) == Ordering::Greater {
                min = FindResult::new(item.clone(), index);
            }
            if comparer.compare(&max.value, &item, max.index, index) == Ordering::Less {
                max = FindResult::new(item, index);
            }
        }
        Some(MinmaxResult { min, max })
    }

    /// Final value of [`scan`](Sequence::scan), or `None` if the scan
    /// produced nothing (fewer than two items).
    fn fold<F>(&self, mut combine: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item, usize) -> Self::Item,
    {
        let mut cursor = self.cursor().enumerate();
        let (_, mut acc) = cursor.next()?;
        let mut combined = false;
        for (index, item) in cursor {
            acc = combine(acc, item, index);
            combined = true;
        }
        combined.then_some(acc)
    }

    /// Final value of [`scan_with`](Sequence::scan_with), or `None` if the
    /// sequence is empty.
    fn fold_with<U, F>(&self, seed: U, mut combine: F) -> Option<U>
    where
        F: FnMut(U, Self::Item, usize) -> U,
    {
        let mut cursor = self.cursor().enumerate();
        let (index, first) = cursor.next()?;
        let mut acc = combine(seed, first, index);
        for (index, item) in cursor {
            acc = combine(acc, item, index);
        }
        Some(acc)
    }

    /// All items, in order.
    #[doc(alias = "to_array")]
    fn to_vec(&self) -> Vec<Self::Item> {
        self.cursor().collect()
    }

    /// All distinct items, in order of first occurrence.
    fn to_set(&self) -> IndexSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.cursor().collect()
    }

    /// Items keyed by `key`, in insertion order. A later item overwrites the
    /// value of an earlier key but keeps that key's position.
    fn to_map<K, F>(&self, key: F) -> IndexMap<K, Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item, usize) -> K,
    {
        self.to_map_with(key, |item, _| item)
    }

    /// Values selected by `value`, keyed by `key`. Ordered like
    /// [`to_map`](Sequence::to_map).
    fn to_map_with<K, V, F, G>(&self, mut key: F, mut value: G) -> IndexMap<K, V>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item, usize) -> K,
        G: FnMut(Self::Item, usize) -> V,
    {
        self.cursor()
            .enumerate()
            .map(|(index, item)| (key(&item, index), value(item, index)))
            .collect()
    }

    /// A JSON object with one member per item, named by `name`. Members
    /// keep insertion order; a repeated name overwrites in place.
    ///
    /// Fails with [`SeqError::Serialize`](crate::SeqError::Serialize) if an
    /// item cannot be represented as JSON.
    fn to_object<F>(&self, name: F) -> Result<serde_json::Map<String, serde_json::Value>>
    where
        Self::Item: Serialize,
        F: FnMut(&Self::Item, usize) -> String,
    {
        self.to_object_with(name, |item, _| item)
    }

    /// A JSON object with members named by `name` and valued by `value`.
    fn to_object_with<V, F, G>(
        &self,
        mut name: F,
        mut value: G,
    ) -> Result<serde_json::Map<String, serde_json::Value>>
    where
        V: Serialize,
        F: FnMut(&Self::Item, usize) -> String,
        G: FnMut(Self::Item, usize) -> V,
    {
        let mut object = serde_json::Map::new();
        for (index, item) in self.cursor().enumerate() {
            let member = name(&item, index);
            object.insert(member, serde_json::to_value(value(item, index))?);
        }
        Ok(object)
    }

    /// See [`compare`](crate::compare).
    fn compare<R>(&self, other: R) -> Ordering
    where
        R: Sequence<Item = Self::Item>,
        Self::Item: PartialOrd,
    {
        crate::paired::compare_by(self, other, NaturalOrder)
    }

    /// See [`compare_by`](crate::compare_by).
    fn compare_by<R, C>(&self, other: R, comparer: C) -> Ordering
    where
        R: Sequence<Item = Self::Item>,
        C: Comparer<Self::Item>,
    {
        crate::paired::compare_by(self, other, comparer)
    }

    /// See [`equal`](crate::equal).
    fn equal<R>(&self, other: R) -> bool
    where
        R: Sequence<Item = Self::Item>,
        Self::Item: SameValue,
    {
        crate::paired::equal_by(self, other, IdentityEquals)
    }

    /// See [`equal_by`](crate::equal_by).
    fn equal_by<R, E>(&self, other: R, equals: E) -> bool
    where
        R: Sequence<Item = Self::Item>,
        E: Equality<Self::Item>,
    {
        crate::paired::equal_by(self, other, equals)
    }

    /// See [`find_mismatch`](crate::find_mismatch).
    fn find_mismatch<R>(&self, other: R) -> Option<MismatchResult<Self::Item>>
    where
        R: Sequence<Item = Self::Item>,
        Self::Item: SameValue,
    {
        crate::paired::find_mismatch_by(self, other, IdentityEquals)
    }

    /// See [`find_mismatch_by`](crate::find_mismatch_by).
    fn find_mismatch_by<R, E>(&self, other: R, equals: E) -> Option<MismatchResult<Self::Item>>
    where
        R: Sequence<Item = Self::Item>,
        E: Equality<Self::Item>,
    {
        crate::paired::find_mismatch_by(self, other, equals)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

/// A type-erased sequence. Created by [`Sequence::boxed`].
pub struct BoxSeq<'a, T> {
    factory: Rc<dyn Fn() -> Box<dyn Iterator<Item = T> + 'a> + 'a>,
}

impl<T> Clone for BoxSeq<'_, T> {
    fn clone(&self) -> Self {
        BoxSeq {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<'a, T> Sequence for BoxSeq<'a, T> {
    type Item = T;
    type Cursor = Box<dyn Iterator<Item = T> + 'a>;

    fn cursor(&self) -> Self::Cursor {
        (self.factory)()
    }
}
