//! Replaying a whole sequence. Created by [`Sequence::repeat`].

use std::rc::Rc;

use crate::sequence::Sequence;

/// Replays the upstream sequence `count` times, or forever when `count` is
/// `None`. Each lap opens a fresh upstream cursor, so the upstream must be
/// restartable.
///
/// A lap that produces nothing ends the repetition, which keeps an endless
/// repeat of an empty sequence from spinning.
pub struct Repeat<S> {
    source: Rc<S>,
    count: Option<usize>,
}

impl<S> Repeat<S> {
    pub(crate) fn new(source: S, count: Option<usize>) -> Self {
        Repeat {
            source: Rc::new(source),
            count,
        }
    }
}

impl<S> Clone for Repeat<S> {
    fn clone(&self) -> Self {
        Repeat {
            source: Rc::clone(&self.source),
            count: self.count,
        }
    }
}

impl<S: Sequence> Sequence for Repeat<S> {
    type Item = S::Item;
    type Cursor = RepeatCursor<S>;

    fn cursor(&self) -> Self::Cursor {
        RepeatCursor {
            source: Rc::clone(&self.source),
            lap: None,
            laps_left: self.count,
            lap_yielded: false,
        }
    }
}

pub struct RepeatCursor<S: Sequence> {
    source: Rc<S>,
    lap: Option<S::Cursor>,
    laps_left: Option<usize>,
    lap_yielded: bool,
}

impl<S: Sequence> RepeatCursor<S> {
    fn start_lap(&mut self) -> bool {
        match self.laps_left {
            Some(0) => return false,
            Some(n) => self.laps_left = Some(n - 1),
            None => {}
        }
        self.lap = Some(self.source.cursor());
        self.lap_yielded = false;
        true
    }
}

impl<S: Sequence> Iterator for RepeatCursor<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if let Some(lap) = self.lap.as_mut() {
                if let Some(item) = lap.next() {
                    self.lap_yielded = true;
                    return Some(item);
                }
                self.lap = None;
                if !self.lap_yielded {
                    self.laps_left = Some(0);
                    return None;
                }
            }
            if !self.start_lap() {
                return None;
            }
        }
    }
}
