//! The bare word buffer and its three cached scalars, owned exclusively by
//! one set. This is the representation the cursor borrows and the appender
//! mutates; it carries no algebra of its own.

#[cfg(feature = "no-std")]
use alloc::vec::Vec;
use core::cell::Cell;

use crate::word;

/// A growable sequence of 32-bit words encoding a compressed set, plus the
/// cached scalars that make common queries O(1).
///
/// `RawIntSet` owns its buffer exclusively: operations that need a new
/// representation build one and either hand it back (pure constructors) or
/// atomically swap it in (in-place mutations), never aliasing another set's
/// buffer.
#[derive(Clone, Default)]
pub struct RawIntSet {
	words: Vec<u32>,
	/// Index of the last active word, or `-1` (represented as `None`) when
	/// empty.
	last_word_index: Option<usize>,
	/// The largest element currently in the set, or `None` when empty.
	last: Option<u32>,
	/// Cardinality, or `None` when invalidated and pending recomputation.
	/// A `Cell` so that a read-only `size()` query can cache a freshly
	/// recomputed value without requiring `&mut self`.
	size: Cell<Option<usize>>,
	/// Index of the marker word governing the tail literals, or `None` when
	/// empty.
	last_marker_index: Option<usize>
}

impl RawIntSet {
	/// Builds the canonical empty set: no buffer, all cached scalars unset.
	pub const fn new() -> Self {
		Self {
			words: Vec::new(),
			last_word_index: None,
			last: None,
			size: Cell::new(None),
			last_marker_index: None
		}
	}

	/// Builds an empty set whose word buffer has at least `capacity` words
	/// of spare room, to avoid reallocating while appending a
	/// known-approximate number of words.
	pub fn with_word_capacity(capacity: usize) -> Self {
		Self {
			words: Vec::with_capacity(capacity),
			..Self::new()
		}
	}

	/// The active region of the word buffer.
	#[inline]
	pub fn words(&self) -> &[u32] {
		match self.last_word_index {
			Some(i) => &self.words[..=i],
			None => &[]
		}
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.last_word_index.is_none()
	}

	#[inline]
	pub fn last_word_index(&self) -> Option<usize> {
		self.last_word_index
	}

	#[inline]
	pub fn last_marker_index(&self) -> Option<usize> {
		self.last_marker_index
	}

	#[inline]
	pub fn cached_last(&self) -> Option<u32> {
		self.last
	}

	#[inline]
	pub fn cached_size(&self) -> Option<usize> {
		self.size.get()
	}

	/// Marks the cardinality as invalid; it will be recomputed on next read.
	#[inline]
	pub fn invalidate_size(&self) {
		self.size.set(None);
	}

	#[inline]
	pub fn set_size(&self, size: usize) {
		self.size.set(Some(size));
	}

	/// Number of literals currently attached to the tail marker (0 if the
	/// tail is a single-value marker, or if the set is empty).
	pub fn attached_tail_literals(&self) -> usize {
		match (self.last_marker_index, self.last_word_index) {
			(Some(marker), Some(last)) => last - marker,
			_ => 0
		}
	}

	/// Ensures the buffer can grow by `additional_words` more words without
	/// reallocating, doubling the buffer's capacity (at least) as described
	/// by the growth discipline in the design notes, rather than growing by
	/// exactly the amount requested every time.
	pub fn reserve(&mut self, additional_words: usize) {
		let required = self.words.len() + additional_words;
		if required > self.words.capacity() {
			let doubled = self.words.capacity() * 2;
			self.words
				.reserve(core::cmp::max(doubled, required) - self.words.len());
		}
	}

	/// Pushes a raw word onto the buffer, growing the active region by one.
	/// Does not touch any cached scalar; callers (the appender) are
	/// responsible for keeping `last`/`last_marker_index`/`size` consistent.
	pub fn push_word(&mut self, w: u32) -> usize {
		self.reserve(1);
		self.words.push(w);
		let index = self.words.len() - 1;
		self.last_word_index = Some(index);
		index
	}

	pub fn word_at(&self, index: usize) -> u32 {
		self.words[index]
	}

	pub fn set_word_at(&mut self, index: usize, w: u32) {
		self.words[index] = w;
	}

	pub fn set_last_marker_index(&mut self, index: usize) {
		self.last_marker_index = Some(index);
	}

	pub fn set_last(&mut self, last: Option<u32>) {
		self.last = last;
	}

	/// Truncates the active region back to `new_last_word_index` words
	/// (inclusive), used when the appender needs to roll back a partially
	/// written marker.
	pub fn truncate_to(&mut self, new_last_word_index: Option<usize>) {
		self.last_word_index = new_last_word_index;
		match new_last_word_index {
			Some(i) => self.words.truncate(i + 1),
			None => self.words.clear()
		}
	}

	pub fn reset_to_empty(&mut self) {
		self.words.clear();
		self.last_word_index = None;
		self.last = None;
		self.size.set(None);
		self.last_marker_index = None;
	}

	/// Recomputes `last` from the final word, per the canonicalization rule:
	/// if the tail is a single-value marker, `last` is that value; otherwise
	/// it is the prefix of the tail marker, plus 32 times the number of
	/// literals preceding the tail literal, plus the position of its
	/// highest set bit.
	pub fn refresh_last(&mut self) {
		let Some(last_index) = self.last_word_index else {
			self.last = None;
			return;
		};

		let marker_index = self
			.last_marker_index
			.expect("a non-empty canonical set always has a governing marker");

		self.last = Some(if last_index == marker_index {
			// The tail marker has no attached literals: it is a single-value marker.
			word::decode_single_value(self.words[last_index])
		} else {
			let tail = self.words[last_index];
			let literals_before = (last_index - marker_index - 1) as u32;
			let highest_bit = 31 - tail.leading_zeros();
			word::prefix_of(self.words[marker_index]) + literals_before * word::BLOCK_BITS + highest_bit
		});
	}
}
