//! # itercomb - Lazy Sequence Adaptors
//!
//! Composable, lazy adaptors over sequences: infinite generators, filters,
//! folds, slicing, concatenation, zipping, run grouping and the
//! combinatorial family (Cartesian product, permutations, combinations).
//!
//! Every adaptor is built from the same two pieces:
//!
//! - a [`Cursor`]: a position that can be read, advanced and compared
//! - a [`SequenceView`]: a restartable (begin cursor, end marker) pair
//!
//! Adaptors take any [`Sequence`] and hand back a `SequenceView`, which is
//! itself a `Sequence`, so pipelines nest freely:
//!
//! ```
//! use itercomb::{FilterExt, IsliceExt, count};
//!
//! let odd_squares: Vec<u64> = count(1u64, 1u64)
//!     .filter(|n| n % 2 == 1)
//!     .islice(0, Some(4), 1)
//!     .unwrap()
//!     .into_iter()
//!     .map(|n| n * n)
//!     .collect();
//! assert_eq!(odd_squares, vec![1, 9, 25, 49]);
//! ```
//!
//! Nothing is evaluated until a view is iterated. Reading a cursor that sits
//! at its end returns [`IterError::ReadAtEnd`] rather than reading out of
//! bounds, and misconfigured constructors (a zero step, a zero-sized
//! selection) fail with [`IterError::InvalidArgument`].

pub mod accumulate;
pub mod chain;
pub mod combinations;
pub mod combinations_with_replacement;
pub mod compress;
pub mod count;
pub mod cursor;
pub mod cursors;
pub mod cycle;
pub mod dropwhile;
pub mod error;
pub mod filter;
pub mod groupby;
pub mod islice;
pub mod permutations;
pub mod product;
pub mod repeat;
pub mod sequence;
pub mod starmap;
pub mod takewhile;
pub mod tee;
pub mod truthy;
pub mod wheel;
pub mod zip;
pub mod zip_longest;

#[cfg(test)]
mod testing;

pub use accumulate::{AccumulateExt, accumulate, sum_accumulate};
pub use chain::chain;
pub use combinations::combinations;
pub use combinations_with_replacement::combinations_with_replacement;
pub use compress::compress;
pub use count::count;
pub use cursor::{Cursor, Terminus, Unbounded, Upstream};
pub use cursors::{IterCursor, SliceCursor};
pub use cycle::{CycleEnd, CycleExt, cycle};
pub use dropwhile::{DropWhileExt, dropwhile};
pub use error::{IterError, Result};
pub use filter::{FilterExt, filter, filter_truthy, filterfalse, filterfalse_truthy};
pub use groupby::{GroupByExt, groupby, groupby_key};
pub use islice::{IsliceExt, islice};
pub use permutations::{permutations, permutations_full};
pub use product::{product, product_n, product_repeat};
pub use repeat::{repeat, repeat_n};
pub use sequence::{IterSource, Sequence, SequenceView, iterable};
pub use starmap::{Spread, StarmapExt, starmap};
pub use takewhile::{TakeWhileExt, takewhile};
pub use tee::tee;
pub use truthy::Truthy;
pub use wheel::Wheel;
pub use zip::zip;
pub use zip_longest::{zip_longest, zip_longest_with};
