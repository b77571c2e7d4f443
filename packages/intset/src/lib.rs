//! `intset` is a compressed set of non-negative 32-bit integers, encoded as
//! a sequence of 32-bit machine words using a hybrid run-length/literal-bitmap
//! scheme. It supports the standard set algebra (membership, insertion,
//! deletion, union, intersection, difference, symmetric difference,
//! complement) plus ordered iteration, positional access, ranged fill/clear,
//! and lexicographic comparison, all operating directly on the compressed
//! representation without decompressing to a plain bitmap.
//!
//! # Word layout
//!
//! Every word is either a *marker*, whose top bit is set and whose remaining
//! bits encode a 32-value block's prefix plus a count of attached literal
//! words, or a *single-value marker*, whose top bit is clear and whose whole
//! value is a standalone element. See [`intset_core`] for the full layout.
//!
//! # Example
//!
//! ```
//! use intset::IntSet;
//!
//! let mut a: IntSet = [4u32, 40, 3, 1, 11000].into_iter().collect();
//! let b: IntSet = [2u32, 4, 3, 10, 11, 20, 40].into_iter().collect();
//!
//! assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 3, 4, 40, 11000]);
//! assert_eq!(a.intersection(&b).iter().collect::<Vec<_>>(), vec![3, 4, 40]);
//!
//! a.fill(10, 50).unwrap();
//! a.clear_range(20, 30).unwrap();
//! assert!(a.contains(19) && !a.contains(20) && a.contains(31));
//! ```
//!
//! # Logging
//!
//! This crate uses the [`log`](https://crates.io/crates/log) crate to trace
//! cursor and appender internals (marker openings, `skip_all_before` long
//! jumps) for callers who wire up a subscriber. Nothing is ever printed
//! directly to stdout or stderr.

#![forbid(unsafe_code)]
#![forbid(rustdoc::broken_intra_doc_links)]
#![deny(clippy::print_stdout)]
#![warn(unreachable_pub)]
#![warn(clippy::use_self)]

mod algebra;
mod debug;
mod error;
mod iter;
mod set;

pub use error::IntSetError;
pub use iter::{Iter, RevIter};
pub use set::IntSet;
