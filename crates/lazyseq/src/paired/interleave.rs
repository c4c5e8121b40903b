//! Alternating two sequences.

use either::Either;

use crate::sequence::Sequence;

/// Alternates `lhs, rhs, lhs, rhs, ...`, starting and ending with a left item.
///
/// A left item after the first is only emitted once the right item that
/// separates it from the previous one exists, so the output stops as soon as
/// either side runs out and never ends on a right item.
///
/// ```
/// use either::Either::{Left, Right};
/// use lazyseq::{interleave, values, Sequence};
///
/// let seq = interleave(values(vec![1, 2, 3]), values(vec!['a']));
/// assert_eq!(seq.to_vec(), vec![Left(1), Right('a'), Left(2)]);
/// ```
pub fn interleave<L, R>(lhs: L, rhs: R) -> Interleave<L, R>
where
    L: Sequence,
    R: Sequence,
{
    Interleave { lhs, rhs }
}

/// Created by [`interleave`] and [`Sequence::interleave`].
#[derive(Clone)]
pub struct Interleave<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Sequence, R: Sequence> Sequence for Interleave<L, R> {
    type Item = Either<L::Item, R::Item>;
    type Cursor = InterleaveCursor<L::Cursor, R::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        InterleaveCursor {
            lhs: self.lhs.cursor(),
            rhs: self.rhs.cursor(),
            state: State::First,
        }
    }
}

enum State<T> {
    First,
    /// A separator was emitted; this left item comes next.
    Pending(T),
    Between,
    Done,
}

pub struct InterleaveCursor<L: Iterator, R> {
    lhs: L,
    rhs: R,
    state: State<L::Item>,
}

impl<L: Iterator, R: Iterator> Iterator for InterleaveCursor<L, R> {
    type Item = Either<L::Item, R::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => None,
            State::First => {
                let left = self.lhs.next()?;
                self.state = State::Between;
                Some(Either::Left(left))
            }
            State::Pending(left) => {
                self.state = State::Between;
                Some(Either::Left(left))
            }
            State::Between => {
                let right = self.rhs.next()?;
                let left = self.lhs.next()?;
                self.state = State::Pending(left);
                Some(Either::Right(right))
            }
        }
    }
}
