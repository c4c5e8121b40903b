//! Positional zipping of any number of sequences.

use std::iter::Fuse;
use std::rc::Rc;

use crate::sequence::Sequence;

/// Zips sequences into rows, one element per source.
///
/// Rows keep coming until every source is exhausted; a source that ended
/// early contributes `None` at its position. Zipping no sources yields
/// nothing.
///
/// ```
/// use lazyseq::{values, zip, Sequence};
///
/// let rows = zip(vec![values(vec![5]), values(vec![2, 9])]).to_vec();
/// assert_eq!(rows, vec![vec![Some(5), Some(2)], vec![None, Some(9)]]);
/// ```
pub fn zip<S, I>(sources: I) -> Zip<S>
where
    S: Sequence,
    I: IntoIterator<Item = S>,
{
    Zip {
        sources: sources.into_iter().collect(),
    }
}

/// Created by [`zip`] and [`Sequence::zip`].
pub struct Zip<S> {
    sources: Rc<[S]>,
}

impl<S> Clone for Zip<S> {
    fn clone(&self) -> Self {
        Zip {
            sources: Rc::clone(&self.sources),
        }
    }
}

impl<S: Sequence> Sequence for Zip<S> {
    type Item = Vec<Option<S::Item>>;
    type Cursor = ZipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipCursor {
            cursors: self.sources.iter().map(|s| s.cursor().fuse()).collect(),
            done: false,
        }
    }
}

pub struct ZipCursor<C> {
    cursors: Vec<Fuse<C>>,
    done: bool,
}

impl<C: Iterator> Iterator for ZipCursor<C> {
    type Item = Vec<Option<C::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let row: Vec<Option<C::Item>> = self.cursors.iter_mut().map(Iterator::next).collect();
        if row.iter().any(Option::is_some) {
            Some(row)
        } else {
            self.done = true;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{values, Values};

    #[test]
    fn no_sources_is_empty() {
        assert!(zip(Vec::<Values<i32>>::new()).to_vec().is_empty());
    }

    #[test]
    fn single_source_splits_into_rows() {
        let rows = zip(vec![values(vec![5, 7])]).to_vec();
        assert_eq!(rows, vec![vec![Some(5)], vec![Some(7)]]);
    }

    #[test]
    fn same_length_sources() {
        let rows = values(vec![5, 7]).zip(vec![values(vec![2, 9])]).to_vec();
        assert_eq!(rows, vec![vec![Some(5), Some(2)], vec![Some(7), Some(9)]]);
    }
}
