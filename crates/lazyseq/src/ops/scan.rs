//! Running accumulation. Created by [`Sequence::scan`] and
//! [`Sequence::scan_with`].
//!
//! Without a seed the first item becomes the accumulator and is not yielded
//! on its own, so `n` items produce `n - 1` results and the first `combine`
//! call sees index 1. With a seed every item produces a result and the first
//! call is `combine(seed, first, 0)`.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Where the accumulator of a fresh cursor comes from.
pub(crate) enum Seed<T, U> {
    /// The first item, converted into the accumulator type.
    FirstItem(fn(T) -> U),
    /// An explicit starting value, cloned for every cursor.
    Value(U),
}

impl<T, U: Clone> Clone for Seed<T, U> {
    fn clone(&self) -> Self {
        match self {
            Seed::FirstItem(convert) => Seed::FirstItem(*convert),
            Seed::Value(seed) => Seed::Value(seed.clone()),
        }
    }
}

pub struct Scan<S: Sequence, F, U> {
    source: S,
    combine: Rc<F>,
    seed: Seed<S::Item, U>,
}

impl<S: Sequence, F> Scan<S, F, S::Item> {
    pub(crate) fn unseeded(source: S, combine: F) -> Self {
        Scan {
            source,
            combine: Rc::new(combine),
            seed: Seed::FirstItem(std::convert::identity),
        }
    }
}

impl<S: Sequence, F, U> Scan<S, F, U> {
    pub(crate) fn seeded(source: S, seed: U, combine: F) -> Self {
        Scan {
            source,
            combine: Rc::new(combine),
            seed: Seed::Value(seed),
        }
    }
}

impl<S, F, U> Clone for Scan<S, F, U>
where
    S: Sequence + Clone,
    U: Clone,
{
    fn clone(&self) -> Self {
        Scan {
            source: self.source.clone(),
            combine: Rc::clone(&self.combine),
            seed: self.seed.clone(),
        }
    }
}

impl<S, F, U> Sequence for Scan<S, F, U>
where
    S: Sequence,
    F: Fn(U, S::Item, usize) -> U,
    U: Clone,
{
    type Item = U;
    type Cursor = ScanCursor<S::Cursor, F, U>;

    fn cursor(&self) -> Self::Cursor {
        let (acc, convert) = match &self.seed {
            Seed::FirstItem(convert) => (None, Some(*convert)),
            Seed::Value(seed) => (Some(seed.clone()), None),
        };
        ScanCursor {
            inner: self.source.cursor(),
            combine: Rc::clone(&self.combine),
            acc,
            convert,
            index: 0,
        }
    }
}

pub struct ScanCursor<C: Iterator, F, U> {
    inner: C,
    combine: Rc<F>,
    acc: Option<U>,
    convert: Option<fn(C::Item) -> U>,
    index: usize,
}

impl<C, F, U> Iterator for ScanCursor<C, F, U>
where
    C: Iterator,
    F: Fn(U, C::Item, usize) -> U,
    U: Clone,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            let item = self.inner.next()?;
            let index = self.index;
            self.index += 1;
            match (self.acc.take(), self.convert) {
                (Some(acc), _) => {
                    let next = (self.combine)(acc, item, index);
                    self.acc = Some(next.clone());
                    return Some(next);
                }
                (None, Some(convert)) => self.acc = Some(convert(item)),
                (None, None) => return None,
            }
        }
    }
}
