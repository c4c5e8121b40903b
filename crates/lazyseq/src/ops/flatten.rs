//! One-level flattening. Created by [`Sequence::flatten`] and
//! [`Sequence::flat_map`].

use std::rc::Rc;

use crate::sequence::Sequence;

pub(crate) fn identity<T>(item: T, _index: usize) -> T {
    item
}

/// Treats each (optionally transformed) item as an iterable and yields its
/// elements in order. Nested iterables inside those elements are left alone.
pub struct FlatMap<S, F> {
    source: S,
    transform: Rc<F>,
}

impl<S, F> FlatMap<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        FlatMap {
            source,
            transform: Rc::new(transform),
        }
    }
}

impl<S: Clone, F> Clone for FlatMap<S, F> {
    fn clone(&self) -> Self {
        FlatMap {
            source: self.source.clone(),
            transform: Rc::clone(&self.transform),
        }
    }
}

impl<S, F, I> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor = FlatMapCursor<S::Cursor, F, I>;

    fn cursor(&self) -> Self::Cursor {
        FlatMapCursor {
            outer: self.source.cursor(),
            inner: None,
            transform: Rc::clone(&self.transform),
            index: 0,
        }
    }
}

pub struct FlatMapCursor<C, F, I: IntoIterator> {
    outer: C,
    inner: Option<I::IntoIter>,
    transform: Rc<F>,
    index: usize,
}

impl<C, F, I> Iterator for FlatMapCursor<C, F, I>
where
    C: Iterator,
    F: Fn(C::Item, usize) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            let nested = self.outer.next()?;
            let index = self.index;
            self.index += 1;
            self.inner = Some((self.transform)(nested, index).into_iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{empty, values, Sequence};

    #[test]
    fn flatten_empty() {
        assert!(empty::<Vec<i32>>().flatten().to_vec().is_empty());
    }

    #[test]
    fn flatten_skips_empty_inner() {
        let seq = values(vec![vec![], vec![3, 7], vec![], vec![9]]).flatten();
        assert_eq!(seq.to_vec(), vec![3, 7, 9]);
    }

    #[test]
    fn flatten_one_level_only() {
        let seq = values(vec![vec![vec![3], vec![7]], vec![vec![5, 9]]]).flatten();
        assert_eq!(seq.to_vec(), vec![vec![3], vec![7], vec![5, 9]]);
    }

    #[test]
    fn flat_map_strings_into_chars() {
        let seq = values(vec!["bob", "al"]).flat_map(|s, _| s.chars());
        assert_eq!(seq.to_vec(), vec!['b', 'o', 'b', 'a', 'l']);
    }

    #[test]
    fn flat_map_receives_outer_index() {
        let seq = values(vec![1, 1]).flat_map(|x, i| vec![x; i + 1]);
        assert_eq!(seq.to_vec(), vec![1, 1, 1]);
    }
}
