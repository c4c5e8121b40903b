//! Lazyseq - Lazy, restartable sequence pipelines.
//!
//! Lazyseq wraps any restartable source (a slice, a container, an integer
//! range, a generator closure) in a [`Sequence`] and lets you chain
//! operators on it. Nothing runs until a terminal operation pulls items, and
//! every terminal operation starts a fresh traversal. It supports:
//!
//! - Element-wise operators: `map`, `filter`, `inspect`, `scan`, `flatten`
//! - Slicing: `take`, `skip` and their predicate forms
//! - Grouping: `buffer` (fixed chunks) and `window` (sliding)
//! - Combining: `concat`, `zip`, `interleave`, `repeat`
//! - Sorted-input algebra: `merge`, `set_union`, `set_intersection`,
//!   `set_difference`, `set_symmetric_difference`
//! - Terminal reductions: `count`, `first`, `find`, `min`/`max`, `fold`,
//!   `to_vec`, `to_set`, `to_map`, `to_object`
//!
//! # Quick Start
//!
//! ```rust
//! use lazyseq::{range, values, Sequence};
//!
//! // Infinite sources are fine as long as something bounds them.
//! let odd_squares = range(1, None)
//!     .map(|n, _| n * n)
//!     .filter(|n, _| n % 2 == 1)
//!     .take(4);
//! assert_eq!(odd_squares.to_vec(), vec![1, 9, 25, 49]);
//!
//! // Callbacks receive the position of the item alongside the item.
//! let names = values(vec!["ann", "bob", "cy"]);
//! let found = names.find(|name, index| index > 0 && name.len() == 2).unwrap();
//! assert_eq!((found.value, found.index), ("cy", 2));
//!
//! // Sorted inputs can be combined without materializing them.
//! let merged = values(vec![1, 4, 9]).set_union(values(vec![2, 4, 8]));
//! assert_eq!(merged.to_vec(), vec![1, 2, 4, 8, 9]);
//! ```
//!
//! # Semantics
//!
//! | Concern | Rule |
//! |---------|------|
//! | Evaluation | Operators build; terminals pull. No item is read early. |
//! | Restarting | Each `cursor()` call starts over with its own state. |
//! | Positions | Callbacks see zero-based positions in their own input. |
//! | Absence | Lookups return `None` rather than a sentinel. |
//! | Ordering | [`NaturalOrder`] by default, any [`Comparer`] via `_by`. |
//! | Equality | [`IdentityEquals`] by default (`NaN == NaN`, `0.0 != -0.0`). |
//!
//! Errors are limited to invalid arguments ([`SeqError::InvalidSize`]) and
//! JSON conversion ([`SeqError::Serialize`]); every other operation is
//! infallible.

mod error;
mod ops;
mod paired;
mod result;
mod sequence;
mod source;
mod strategy;

// Re-export public API
pub use error::{Result, SeqError};
pub use ops::{
    concat, zip, Buffer, BufferCursor, Concat, ConcatCursor, DedupCursor,
    FilterConsecutiveDuplicates, Filter, FilterCursor, FlatMap, FlatMapCursor, Inspect,
    InspectCursor, Map, MapCursor, Repeat, RepeatCursor, Scan, ScanCursor, Skip, SkipCursor,
    SkipWhile, SkipWhileCursor, Take, TakeCursor, TakeWhile, TakeWhileCursor, Window,
    WindowCursor, Zip, ZipCursor,
};
pub use paired::{
    compare, compare_by, equal, equal_by, find_mismatch, find_mismatch_by, interleave, merge,
    merge_by, set_difference, set_difference_by, set_intersection, set_intersection_by,
    set_symmetric_difference, set_symmetric_difference_by, set_union, set_union_by, Interleave,
    InterleaveCursor, SortedPair, SortedPairCursor,
};
pub use result::{FindResult, MinmaxResult, MismatchResult};
pub use sequence::{BoxSeq, Sequence};
pub use source::{
    empty, from_fn, range, repeat, values, wrap, Empty, FromFn, Range, RangeCursor, RepeatValue,
    RepeatValueCursor, Values, ValuesCursor, Wrap,
};
pub use strategy::{Comparer, Equality, IdentityEquals, Indexed, NaturalOrder, Reverse, SameValue};

// Types that appear in `interleave` output and in materialized collections.
pub use either::Either;
pub use indexmap::{IndexMap, IndexSet};
