//! Single-sequence operators.
//!
//! Each operator is a struct that holds its upstream sequence and implements
//! [`Sequence`](crate::Sequence) itself. Per-traversal state (indexes,
//! counters, buffers) lives in the matching `*Cursor` type, which is created
//! fresh by every call to `cursor()`.

mod chunk;
mod concat;
mod dedup;
mod flatten;
mod limit;
mod map;
mod repeat;
mod scan;
mod zip;

pub(crate) use flatten::identity;

pub use chunk::{Buffer, BufferCursor, Window, WindowCursor};
pub use concat::{concat, Concat, ConcatCursor};
pub use dedup::{DedupCursor, FilterConsecutiveDuplicates};
pub use flatten::{FlatMap, FlatMapCursor};
pub use limit::{
    Skip, SkipCursor, SkipWhile, SkipWhileCursor, Take, TakeCursor, TakeWhile, TakeWhileCursor,
};
pub use map::{Filter, FilterCursor, Inspect, InspectCursor, Map, MapCursor};
pub use repeat::{Repeat, RepeatCursor};
pub use scan::{Scan, ScanCursor};
pub use zip::{zip, Zip, ZipCursor};
