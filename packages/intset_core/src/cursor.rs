//! The forward word cursor: a stateful traversal over a set's word array
//! that exposes one logical block per step (either a literal or a
//! single-value marker), hiding the marker words that govern runs of
//! literals.

use crate::word::{self, BLOCK_BITS};

/// A forward cursor over a compressed set's active word region.
///
/// Borrows the word slice for its entire lifetime; walking it never
/// allocates. Positioned "before the first block" on construction: call
/// [`Cursor::next`] to advance to the first logical block before reading any
/// of the `current_*` accessors.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
	words: &'a [u32],
	/// Index of the last raw word consumed. `-1` before the first `next()`.
	word_index: i64,
	/// Number of literal words still to be consumed under the current
	/// marker, not counting the one just consumed.
	remaining_literals: u32,
	/// Block prefix of the current logical block. `-32` before the first
	/// `next()`, so that `skip_all_before` comparisons behave as if the
	/// cursor starts below every real prefix.
	current_prefix: i64,
	/// The current block's bitmap, unified across both word kinds: for a
	/// literal word this is the raw word; for a single-value marker this is
	/// the one-bit mask for its value's in-block offset.
	literal: u32,
	is_single_value: bool
}

impl<'a> Cursor<'a> {
	/// Creates a cursor positioned before the first block of `words`, the
	/// active region of a compressed set (i.e. `&set_words[..=last_word_index]`,
	/// or `&[]` for an empty set).
	pub fn new(words: &'a [u32]) -> Self {
		Self {
			words,
			word_index: -1,
			remaining_literals: 0,
			current_prefix: -i64::from(BLOCK_BITS),
			literal: 0,
			is_single_value: true
		}
	}

	/// `true` iff there is at least one more raw word to consume.
	#[inline]
	pub fn has_next(&self) -> bool {
		self.word_index + 1 < self.words.len() as i64
	}

	/// Advances to the next logical block (a literal or a single-value
	/// marker), returning `false` if the cursor was already exhausted.
	pub fn next(&mut self) -> bool {
		if !self.has_next() {
			return false;
		}

		self.word_index += 1;
		let w = self.words[self.word_index as usize];

		if self.remaining_literals > 0 {
			self.remaining_literals -= 1;
			self.current_prefix += i64::from(BLOCK_BITS);
			self.is_single_value = false;
			self.literal = w;
		} else {
			self.current_prefix = i64::from(word::prefix_of(w));
			self.is_single_value = word::is_single_value(w);

			if self.is_single_value {
				self.literal = word::literal_for(word::decode_single_value(w));
			} else {
				self.remaining_literals = word::literal_count_of_marker(w);
				self.word_index += 1;
				self.literal = self.words[self.word_index as usize];
			}
		}

		true
	}

	/// Fast inner-loop advance used by the algebra kernel when both cursors
	/// are known to be mid-run. Precondition: [`Self::remaining_literals`]
	/// is greater than 0.
	#[inline]
	pub fn fast_next(&mut self) {
		debug_assert!(self.remaining_literals > 0, "fast_next called with no more literals in the run");
		self.word_index += 1;
		self.remaining_literals -= 1;
		self.current_prefix += i64::from(BLOCK_BITS);
		self.literal = self.words[self.word_index as usize];
	}

	/// Advances until [`Self::current_prefix`] is at least `target_prefix`
	/// (which must itself be a multiple of [`BLOCK_BITS`]), or the cursor is
	/// exhausted. Returns `true` iff the cursor is still positioned on a
	/// block afterwards.
	///
	/// When the cursor is mid-run and the target lies within the words still
	/// attached to the current marker, jumps there in O(1) instead of
	/// stepping one block at a time.
	pub fn skip_all_before(&mut self, target_prefix: u32) -> bool {
		let target_prefix = i64::from(target_prefix);

		while self.current_prefix < target_prefix {
			if self.remaining_literals > 0 {
				let gap = ((target_prefix - self.current_prefix) as u64 / u64::from(BLOCK_BITS)) as u32;

				if gap <= self.remaining_literals {
					self.word_index += i64::from(gap);
					self.current_prefix += i64::from(gap) * i64::from(BLOCK_BITS);
					self.remaining_literals -= gap;
					self.literal = self.words[self.word_index as usize];
					continue;
				}
			}

			if !self.next() {
				return false;
			}
		}

		true
	}

	/// The block prefix of the current logical block. Meaningless before the
	/// first call to [`Self::next`].
	#[inline]
	pub fn current_prefix(&self) -> u32 {
		self.current_prefix as u32
	}

	/// The current block's bitmap: the raw literal word if
	/// [`Self::is_single_value`] is `false`, or a one-bit mask otherwise.
	#[inline]
	pub fn current_literal(&self) -> u32 {
		self.literal
	}

	/// `true` if the current block is a single-value marker (encodes exactly
	/// one element).
	#[inline]
	pub fn is_single_value(&self) -> bool {
		self.is_single_value
	}

	/// Number of literal words still to be consumed, after the current one,
	/// under the marker governing the current block. `0` when the current
	/// block is a single-value marker or is the last literal of its marker.
	#[inline]
	pub fn remaining_literals(&self) -> u32 {
		self.remaining_literals
	}
}

#[cfg(test)]
mod test;
