//! Chunking operators: [`Buffer`] (fixed partitions) and [`Window`]
//! (sliding view).

use std::collections::VecDeque;

use crate::error::{Result, SeqError};
use crate::sequence::Sequence;

/// Upper bound on eager preallocation; larger chunks grow as items arrive.
const PREALLOC_LIMIT: usize = 64;

fn check_size(op: &'static str, size: usize) -> Result<usize> {
    if size == 0 {
        return Err(SeqError::InvalidSize { op, size });
    }
    Ok(size)
}

/// Groups items into consecutive chunks of `size`. The last chunk may be
/// shorter. Created by [`Sequence::buffer`].
#[derive(Clone)]
pub struct Buffer<S> {
    source: S,
    size: usize,
}

impl<S> Buffer<S> {
    pub(crate) fn new(source: S, size: usize) -> Result<Self> {
        let size = check_size("buffer", size)?;
        Ok(Buffer { source, size })
    }
}

impl<S: Sequence> Sequence for Buffer<S> {
    type Item = Vec<S::Item>;
    type Cursor = BufferCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        BufferCursor {
            inner: self.source.cursor(),
            size: self.size,
            done: false,
        }
    }
}

pub struct BufferCursor<C> {
    inner: C,
    size: usize,
    done: bool,
}

impl<C: Iterator> Iterator for BufferCursor<C> {
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut chunk = Vec::with_capacity(self.size.min(PREALLOC_LIMIT));
        while chunk.len() < self.size {
            match self.inner.next() {
                Some(item) => chunk.push(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

/// Sliding window over the most recent `size` items. Nothing is emitted
/// until `size` items have been seen; every emitted window is a fresh `Vec`.
/// Created by [`Sequence::window`].
#[derive(Clone)]
pub struct Window<S> {
    source: S,
    size: usize,
}

impl<S> Window<S> {
    pub(crate) fn new(source: S, size: usize) -> Result<Self> {
        let size = check_size("window", size)?;
        Ok(Window { source, size })
    }
}

impl<S> Sequence for Window<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type Cursor = WindowCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        WindowCursor {
            inner: self.source.cursor(),
            size: self.size,
            recent: VecDeque::with_capacity(self.size.min(PREALLOC_LIMIT)),
        }
    }
}

pub struct WindowCursor<C: Iterator> {
    inner: C,
    size: usize,
    recent: VecDeque<C::Item>,
}

impl<C> Iterator for WindowCursor<C>
where
    C: Iterator,
    C::Item: Clone,
{
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.inner.next()?;
            if self.recent.len() == self.size {
                self.recent.pop_front();
            }
            self.recent.push_back(item);
            if self.recent.len() == self.size {
                return Some(self.recent.iter().cloned().collect());
            }
        }
    }
}
