//! The constructive appender: streams literals (or single elements) into a
//! growing word buffer while maintaining canonical form — no zero literals,
//! at most 32 literals per marker, and single-bit blocks that open a new
//! marker preferentially encoded as single-value markers.

use crate::raw::RawIntSet;
use crate::word::{self, BLOCK_BITS, MAX_LITERALS_PER_MARKER};

/// Builds a [`RawIntSet`] one element or one literal at a time, keeping the
/// buffer canonical after every call.
pub struct Appender {
	raw: RawIntSet,
	/// Tracked only to serve `append_element`'s `i > last` precondition
	/// check; the owning set's authoritative `last` is always recomputed
	/// from the word layout by [`Appender::finish`].
	last: Option<u32>,
	/// Cardinality tracked incrementally while every append on this
	/// appender went through [`Appender::append_element`]. Any
	/// `append_literal*` call forces this to `None`, matching the "does not
	/// update size" contract of those primitives.
	size: Option<usize>
}

/// Where the next literal or element should land, relative to the current
/// tail marker.
enum Slot {
	/// Attach to the marker at `marker_index` (whose current prefix is
	/// `marker_prefix`), which currently has `attached` literals.
	Attach {
		marker_index: usize,
		marker_prefix: u32,
		attached: u32
	},
	OpenNew
}

impl Appender {
	/// Starts building a fresh, empty set.
	pub fn new() -> Self {
		Self {
			raw: RawIntSet::new(),
			last: None,
			size: Some(0)
		}
	}

	/// Starts building a fresh, empty set whose buffer has room for at least
	/// `word_capacity` words without reallocating.
	pub fn with_word_capacity(word_capacity: usize) -> Self {
		Self {
			raw: RawIntSet::with_word_capacity(word_capacity),
			last: None,
			size: Some(0)
		}
	}

	/// Resumes appending onto an already-canonical, non-empty buffer. Used
	/// by the single-element in-place mutations, which only ever append a
	/// new trailing element past the current `last`.
	pub fn resume(raw: RawIntSet) -> Self {
		let last = raw.cached_last();
		let size = raw.cached_size();
		Self { raw, last, size }
	}

	/// The block prefix of the current tail, if any.
	fn tail_block_prefix(&self) -> Option<u32> {
		let marker_index = self.raw.last_marker_index()?;
		let attached = self.raw.attached_tail_literals() as u32;
		let marker_prefix = word::prefix_of(self.raw.word_at(marker_index));

		Some(if attached == 0 {
			marker_prefix
		} else {
			marker_prefix + (attached - 1) * BLOCK_BITS
		})
	}

	fn find_slot(&self, prefix: u32) -> Slot {
		let Some(marker_index) = self.raw.last_marker_index() else {
			return Slot::OpenNew;
		};

		let attached = self.raw.attached_tail_literals() as u32;
		if attached == 0 || attached == MAX_LITERALS_PER_MARKER {
			return Slot::OpenNew;
		}

		let marker_prefix = word::prefix_of(self.raw.word_at(marker_index));
		if prefix == marker_prefix + attached * BLOCK_BITS {
			Slot::Attach {
				marker_index,
				marker_prefix,
				attached
			}
		} else {
			Slot::OpenNew
		}
	}

	fn attach_literal(&mut self, literal: u32, marker_index: usize, marker_prefix: u32, attached: u32) {
		self.raw.push_word(literal);
		self.raw
			.set_word_at(marker_index, word::encode_marker(marker_prefix, attached));
	}

	fn promote_single_value_tail(&mut self, marker_index: usize) {
		let old = self.raw.word_at(marker_index);
		let value = word::decode_single_value(old);
		let prefix = word::prefix_of(old);

		self.raw
			.set_word_at(marker_index, word::encode_marker(prefix, 0));
		self.raw.push_word(word::literal_for(value));
	}

	/// Appends a single new greatest element. Precondition: `i` is strictly
	/// greater than every element already in the set under construction.
	pub fn append_element(&mut self, i: u32) {
		debug_assert!(
			self.last.map_or(true, |last| i > last),
			"append_element requires a strictly increasing sequence"
		);

		match self.raw.last_marker_index() {
			None => {
				let idx = self.raw.push_word(i);
				self.raw.set_last_marker_index(idx);
			}
			Some(marker_index) => {
				let attached_before = self.raw.attached_tail_literals() as u32;
				let marker_prefix = word::prefix_of(self.raw.word_at(marker_index));
				let tail_block_prefix = if attached_before == 0 {
					marker_prefix
				} else {
					marker_prefix + (attached_before - 1) * BLOCK_BITS
				};
				let new_block_prefix = word::block_of(i);

				if new_block_prefix == tail_block_prefix {
					// Only now, knowing `i` actually merges into the tail's own
					// block, do we pay for promoting a single-value tail.
					if attached_before == 0 {
						self.promote_single_value_tail(marker_index);
					}
					let last_index = self.raw.last_word_index().expect("just appended a word");
					let updated = self.raw.word_at(last_index) | word::literal_for(i);
					self.raw.set_word_at(last_index, updated);
				} else if new_block_prefix == tail_block_prefix + BLOCK_BITS && attached_before < MAX_LITERALS_PER_MARKER {
					if attached_before == 0 {
						self.promote_single_value_tail(marker_index);
					}
					let attached = self.raw.attached_tail_literals() as u32;
					self.attach_literal(word::literal_for(i), marker_index, marker_prefix, attached);
				} else {
					// `i` lands in a block neither equal to nor adjacent to the
					// tail's: leave an existing single-value tail exactly as it
					// is and open a fresh single-value marker for `i`.
					let idx = self.raw.push_word(i);
					self.raw.set_last_marker_index(idx);
				}
			}
		}

		self.last = Some(i);
		self.size = self.size.map(|size| size + 1);
	}

	/// Appends a literal word covering the block at `prefix`. Precondition:
	/// `prefix` is strictly greater than the block prefix of the current
	/// tail, if any (binary operations only ever drive this with
	/// monotonically increasing prefixes).
	pub fn append_literal(&mut self, literal: u32, prefix: u32) {
		if literal == 0 {
			return;
		}

		debug_assert!(
			self.tail_block_prefix().map_or(true, |tail| prefix > tail),
			"append_literal requires strictly increasing block prefixes"
		);

		match self.find_slot(prefix) {
			Slot::Attach {
				marker_index,
				marker_prefix,
				attached
			} => self.attach_literal(literal, marker_index, marker_prefix, attached),
			Slot::OpenNew => {
				if word::contains_only_one_bit(literal) {
					let value = prefix + literal.trailing_zeros();
					let idx = self.raw.push_word(value);
					self.raw.set_last_marker_index(idx);
				} else {
					let marker_idx = self.raw.push_word(word::encode_marker(prefix, 0));
					self.raw.push_word(literal);
					self.raw.set_last_marker_index(marker_idx);
				}
			}
		}

		self.size = None;
	}

	/// Faster variant of [`Self::append_literal`] for a literal already
	/// known to have exactly one bit set, avoiding re-deriving `value` with
	/// a trailing-zeros count.
	pub fn append_literal_singleton(&mut self, literal: u32, prefix: u32, value: u32) {
		debug_assert_eq!(word::literal_for(value), literal);
		debug_assert!(
			self.tail_block_prefix().map_or(true, |tail| prefix > tail),
			"append_literal_singleton requires strictly increasing block prefixes"
		);

		match self.find_slot(prefix) {
			Slot::Attach {
				marker_index,
				marker_prefix,
				attached
			} => self.attach_literal(literal, marker_index, marker_prefix, attached),
			Slot::OpenNew => {
				let idx = self.raw.push_word(value);
				self.raw.set_last_marker_index(idx);
			}
		}

		self.size = None;
	}

	/// Pumps literals out of `cursor` into this appender until either its
	/// current block prefix reaches `limit_prefix` or it is exhausted.
	/// Returns `true` if the limit was reached (the cursor is still
	/// positioned on the block at or past `limit_prefix`), `false` if the
	/// cursor ran out first.
	pub fn append_all(&mut self, cursor: &mut crate::cursor::Cursor<'_>, limit_prefix: u32) -> bool {
		loop {
			if cursor.current_prefix() >= limit_prefix {
				return true;
			}

			self.append_literal(cursor.current_literal(), cursor.current_prefix());

			if !cursor.next() {
				return false;
			}
		}
	}

	/// Finalizes the buffer: refreshes `last` from the tail word and
	/// commits whatever cardinality was tracked (or marks it invalid for the
	/// owner to recompute lazily).
	pub fn finish(mut self) -> RawIntSet {
		self.raw.refresh_last();

		match self.size {
			Some(size) => self.raw.set_size(size),
			None => self.raw.invalidate_size()
		}

		self.raw
	}
}

impl Default for Appender {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod test;
