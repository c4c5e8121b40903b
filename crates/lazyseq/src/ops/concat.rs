//! Sequential chaining of any number of sequences.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Chains sequences end to end: each source is exhausted before the next one
/// is opened.
///
/// The sources share one type; erase heterogeneous pipelines with
/// [`Sequence::boxed`] first.
///
/// ```
/// use lazyseq::{concat, range, values, Sequence};
///
/// let seq = concat(vec![values(vec![1, 2]).boxed(), range(5, Some(7)).boxed()]);
/// assert_eq!(seq.to_vec(), vec![1, 2, 5, 6]);
/// ```
pub fn concat<S, I>(sources: I) -> Concat<S>
where
    S: Sequence,
    I: IntoIterator<Item = S>,
{
    Concat {
        sources: sources.into_iter().collect(),
    }
}

/// Created by [`concat`] and [`Sequence::concat`].
pub struct Concat<S> {
    sources: Rc<[S]>,
}

impl<S> Clone for Concat<S> {
    fn clone(&self) -> Self {
        Concat {
            sources: Rc::clone(&self.sources),
        }
    }
}

impl<S: Sequence> Sequence for Concat<S> {
    type Item = S::Item;
    type Cursor = ConcatCursor<S>;

    fn cursor(&self) -> Self::Cursor {
        ConcatCursor {
            sources: Rc::clone(&self.sources),
            position: 0,
            current: None,
        }
    }
}

pub struct ConcatCursor<S: Sequence> {
    sources: Rc<[S]>,
    position: usize,
    current: Option<S::Cursor>,
}

impl<S: Sequence> Iterator for ConcatCursor<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let source = self.sources.get(self.position)?;
            self.position += 1;
            self.current = Some(source.cursor());
        }
    }
}
