//! Algorithms that advance two independent cursors together.

mod compare;
mod interleave;
mod sorted;

pub use compare::{compare, compare_by, equal, equal_by, find_mismatch, find_mismatch_by};
pub use interleave::{interleave, Interleave, InterleaveCursor};
pub use sorted::{
    merge, merge_by, set_difference, set_difference_by, set_intersection, set_intersection_by,
    set_symmetric_difference, set_symmetric_difference_by, set_union, set_union_by, SortedPair,
    SortedPairCursor,
};

pub(crate) use sorted::SetOp;
