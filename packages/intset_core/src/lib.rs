//! Word-level primitives for a compressed set of non-negative 32-bit integers.
//!
//! This crate implements the hybrid run-length/bitmap word layout that
//! backs the `intset` crate: the marker/literal word distinction, the
//! forward and reverse cursors that walk a word buffer block by block, and
//! the constructive appender that keeps a growing buffer in canonical form.
//! None of this crate concerns itself with set algebra or a public
//! collection type — that lives one layer up, in `intset`.
//!
//! # Word layout
//!
//! Every word is either:
//!
//! - A **single-value marker**: its most significant bit is clear, and the
//!   whole 32-bit word is a standalone element value.
//! - A **marker word**: its most significant bit is set. Bits 30 down to 5
//!   hold a 26-bit block prefix (always a multiple of 32); bits 4 down to 0
//!   hold a literal count `k`, and the `k + 1` words immediately following
//!   the marker are literal bitmaps for consecutive 32-value blocks starting
//!   at that prefix.
//!
//! A canonical buffer never stores a zero literal, never attaches more than
//! 32 literals to one marker, and prefers a single-value marker over a
//! one-literal marker whenever a new block starts with exactly one bit set.
//!
//! # `#![no_std]` compatibility
//!
//! By default, this crate depends on the Rust standard library, but it is
//! compatible with `#![no_std]` environments (with `alloc`) when the
//! optional `no-std` feature is enabled.

#![cfg_attr(feature = "no-std", no_std)]
#![forbid(unsafe_code)]
#![forbid(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "no-std")]
extern crate alloc;

pub mod appender;
pub mod cursor;
pub mod raw;
pub mod rev_cursor;
pub mod word;

pub use appender::Appender;
pub use cursor::Cursor;
pub use raw::RawIntSet;
pub use rev_cursor::ReverseCursor;
