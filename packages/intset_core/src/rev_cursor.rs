//! The reverse word cursor. Peripheral in the source this specification was
//! distilled from (reverse iteration is left an unimplemented stub there),
//! but mandated here for `compare_to` and descending iteration.
//!
//! Unlike [`crate::cursor::Cursor`], a backward walk cannot discover which
//! marker governs an arbitrary literal word without either consulting
//! forward bookkeeping or re-scanning from the start of the buffer. Rather
//! than caching an auxiliary marker-position index inside every set (which
//! would break the three-scalar cache of the data model), this cursor does
//! one forward pass up front to flatten the blocks into an owned buffer, then
//! walks that buffer backwards. Reverse iteration and `compare_to` are not on
//! the hot path of the binary algebra operations, so this one-time
//! allocation is an acceptable trade for not needing extra per-set state.

#[cfg(feature = "no-std")]
use alloc::vec::Vec;

use crate::cursor::Cursor;

#[derive(Clone, Copy, Debug)]
struct Block {
	prefix: u32,
	literal: u32,
	is_single_value: bool
}

/// A cursor that walks a compressed set's blocks from the highest prefix
/// down to the lowest.
#[derive(Clone, Debug)]
pub struct ReverseCursor {
	blocks: Vec<Block>,
	/// Index of the current block within `blocks`, or `blocks.len()` before
	/// the first `next()`.
	pos: usize
}

impl ReverseCursor {
	/// Builds a reverse cursor over `words`, the active region of a
	/// compressed set.
	pub fn new(words: &[u32]) -> Self {
		let mut blocks = Vec::new();
		let mut forward = Cursor::new(words);

		while forward.next() {
			blocks.push(Block {
				prefix: forward.current_prefix(),
				literal: forward.current_literal(),
				is_single_value: forward.is_single_value()
			});
		}

		let pos = blocks.len();
		Self { blocks, pos }
	}

	#[inline]
	pub fn has_next(&self) -> bool {
		self.pos > 0
	}

	/// Advances to the next block in descending prefix order.
	pub fn next(&mut self) -> bool {
		if !self.has_next() {
			return false;
		}

		self.pos -= 1;
		true
	}

	/// Advances until [`Self::current_prefix`] is at most `target_prefix`,
	/// or the cursor is exhausted.
	pub fn skip_all_before(&mut self, target_prefix: u32) -> bool {
		while self.next() {
			if self.current_prefix() <= target_prefix {
				return true;
			}
		}

		false
	}

	#[inline]
	pub fn current_prefix(&self) -> u32 {
		self.blocks[self.pos].prefix
	}

	#[inline]
	pub fn current_literal(&self) -> u32 {
		self.blocks[self.pos].literal
	}

	#[inline]
	pub fn is_single_value(&self) -> bool {
		self.blocks[self.pos].is_single_value
	}
}
