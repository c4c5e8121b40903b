//! One-to-one and one-to-at-most-one operators: [`Map`], [`Filter`] and
//! [`Inspect`].
//!
//! All three pass the upstream position to their callback, so `filter` sees
//! the index an item had before filtering, not its position in the output.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Applies a transform to every item. Created by [`Sequence::map`].
pub struct Map<S, F> {
    source: S,
    transform: Rc<F>,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Map {
            source,
            transform: Rc::new(transform),
        }
    }
}

impl<S: Clone, F> Clone for Map<S, F> {
    fn clone(&self) -> Self {
        Map {
            source: self.source.clone(),
            transform: Rc::clone(&self.transform),
        }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> U,
{
    type Item = U;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            inner: self.source.cursor(),
            transform: Rc::clone(&self.transform),
            index: 0,
        }
    }
}

pub struct MapCursor<C, F> {
    inner: C,
    transform: Rc<F>,
    index: usize,
}

impl<C, F, U> Iterator for MapCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.transform)(item, index))
    }
}

/// Keeps the items a predicate accepts. Created by [`Sequence::filter`].
pub struct Filter<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Filter {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for Filter<S, P> {
    fn clone(&self) -> Self {
        Filter {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            inner: self.source.cursor(),
            predicate: Rc::clone(&self.predicate),
            index: 0,
        }
    }
}

pub struct FilterCursor<C, P> {
    inner: C,
    predicate: Rc<P>,
    index: usize,
}

impl<C, P> Iterator for FilterCursor<C, P>
where
    C: Iterator,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            let item = self.inner.next()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Some(item);
            }
        }
    }
}

/// Runs a side effect for every item and passes the item through unchanged.
/// Created by [`Sequence::inspect`].
pub struct Inspect<S, F> {
    source: S,
    process: Rc<F>,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(source: S, process: F) -> Self {
        Inspect {
            source,
            process: Rc::new(process),
        }
    }
}

impl<S: Clone, F> Clone for Inspect<S, F> {
    fn clone(&self) -> Self {
        Inspect {
            source: self.source.clone(),
            process: Rc::clone(&self.process),
        }
    }
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: Fn(&S::Item, usize),
{
    type Item = S::Item;
    type Cursor = InspectCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        InspectCursor {
            inner: self.source.cursor(),
            process: Rc::clone(&self.process),
            index: 0,
        }
    }
}

pub struct InspectCursor<C, F> {
    inner: C,
    process: Rc<F>,
    index: usize,
}

impl<C, F> Iterator for InspectCursor<C, F>
where
    C: Iterator,
    F: Fn(&C::Item, usize),
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let item = self.inner.next()?;
        (self.process)(&item, self.index);
        self.index += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::{values, Sequence};

    #[test]
    fn map_passes_running_index() {
        let seq = values(vec![10, 20, 30]).map(|x, i| x + i as i32);
        assert_eq!(seq.to_vec(), vec![10, 21, 32]);
    }

    #[test]
    fn map_is_lazy() {
        let calls = RefCell::new(0);
        let seq = values(vec![1, 2, 3]).map(|x, _| {
            *calls.borrow_mut() += 1;
            x
        });
        assert_eq!(*calls.borrow(), 0);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn filter_sees_upstream_index() {
        let seen = RefCell::new(Vec::new());
        let seq = values(vec!['a', 'b', 'c', 'd']).filter(|c, i| {
            seen.borrow_mut().push(i);
            *c != 'b'
        });
        assert_eq!(seq.to_vec(), vec!['a', 'c', 'd']);
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn inspect_discards_return_and_passes_item() {
        let seen = RefCell::new(Vec::new());
        let seq = values(vec![3, 5]).inspect(|x, i| seen.borrow_mut().push((*x, i)));
        assert_eq!(seq.to_vec(), vec![3, 5]);
        assert_eq!(*seen.borrow(), vec![(3, 0), (5, 1)]);
    }
}
