//! Error types for the lazyseq crate.
//!
//! Absence ("no such element", "empty source") is never an error; it is
//! reported as `None`. Errors cover misuse detected at construction time and
//! materializations that have to leave Rust's type system.

use thiserror::Error;

/// Errors that can occur when building or materializing sequences.
#[derive(Debug, Error)]
pub enum SeqError {
    /// A chunking operator was given a size it cannot honor.
    #[error("{op} size must be a positive integer, got {size}")]
    InvalidSize { op: &'static str, size: usize },

    /// A value could not be converted into a JSON value.
    #[error("cannot serialize sequence value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for lazyseq operations.
pub type Result<T> = std::result::Result<T, SeqError>;
