//! Records returned by terminal operations.
//!
//! Each record carries the 0-based position of the value within the
//! traversal that produced it. When nothing qualifies, the operation returns
//! `None` instead of a record.

use serde::{Deserialize, Serialize};

/// A value found in a sequence together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FindResult<T> {
    pub value: T,
    pub index: usize,
}

impl<T> FindResult<T> {
    pub fn new(value: T, index: usize) -> Self {
        FindResult { value, index }
    }

    /// Discards the position.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// The first position at which two sequences disagree.
///
/// A side that ended before the other reports `None` for its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MismatchResult<L, R = L> {
    pub lhs_value: Option<L>,
    pub rhs_value: Option<R>,
    pub index: usize,
}

/// The smallest and largest values of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinmaxResult<T> {
    pub min: FindResult<T>,
    pub max: FindResult<T>,
}
