//! Prefix operators: [`Take`], [`TakeWhile`], [`Skip`] and [`SkipWhile`].
//!
//! `Take` checks its budget before pulling from upstream, which makes it the
//! way to bound an infinite source. The predicate forms latch: once
//! `take_while` rejects an item the cursor is finished for good, and once
//! `skip_while` accepts an item every later item passes without consulting
//! the predicate again.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Yields at most `count` items. Created by [`Sequence::take`].
#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Take { source, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            inner: self.source.cursor(),
            remaining: self.count,
        }
    }
}

pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Iterator> Iterator for TakeCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.inner.next();
        self.remaining = if item.is_some() { self.remaining - 1 } else { 0 };
        item
    }
}

/// Yields items while a predicate holds. Created by [`Sequence::take_while`].
pub struct TakeWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        TakeWhile {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for TakeWhile<S, P> {
    fn clone(&self) -> Self {
        TakeWhile {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            inner: self.source.cursor(),
            predicate: Rc::clone(&self.predicate),
            index: 0,
            done: false,
        }
    }
}

pub struct TakeWhileCursor<C, P> {
    inner: C,
    predicate: Rc<P>,
    index: usize,
    done: bool,
}

impl<C, P> Iterator for TakeWhileCursor<C, P>
where
    C: Iterator,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.done {
            return None;
        }
        let item = match self.inner.next() {
            Some(item) => item,
            None => {
                self.done = true;
                return None;
            }
        };
        let index = self.index;
        self.index += 1;
        if (self.predicate)(&item, index) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }
}

/// Discards the first `count` items. Created by [`Sequence::skip`].
#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Skip { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipCursor {
            inner: self.source.cursor(),
            pending: self.count,
        }
    }
}

pub struct SkipCursor<C> {
    inner: C,
    pending: usize,
}

impl<C: Iterator> Iterator for SkipCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.inner.next()?;
        }
        self.inner.next()
    }
}

/// Discards items while a predicate holds, then passes everything.
/// Created by [`Sequence::skip_while`].
pub struct SkipWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        SkipWhile {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for SkipWhile<S, P> {
    fn clone(&self) -> Self {
        SkipWhile {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = SkipWhileCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        SkipWhileCursor {
            inner: self.source.cursor(),
            predicate: Rc::clone(&self.predicate),
            index: 0,
            open: false,
        }
    }
}

pub struct SkipWhileCursor<C, P> {
    inner: C,
    predicate: Rc<P>,
    index: usize,
    open: bool,
}

impl<C, P> Iterator for SkipWhileCursor<C, P>
where
    C: Iterator,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.open {
            return self.inner.next();
        }
        loop {
            let item = self.inner.next()?;
            let index = self.index;
            self.index += 1;
            if !(self.predicate)(&item, index) {
                self.open = true;
                return Some(item);
            }
        }
    }
}
