//! Concrete cursors over backing sequences
//!
//! `SliceCursor` covers contiguous storage, `IterCursor` covers anything that
//! can hand out a cloneable forward iterator (strings, linked lists, B-tree
//! collections, ranges).

pub mod iter;
pub mod slice;

pub use iter::IterCursor;
pub use slice::SliceCursor;
