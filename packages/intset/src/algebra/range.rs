//! Builds the compressed representation of a contiguous integer range
//! `[from, to]` directly, without appending one element at a time: a head
//! mask, any number of all-ones interior literals, and a tail mask.

use intset_core::word::{self, BLOCK_BITS};
use intset_core::{Appender, RawIntSet};

pub(crate) fn range_literal_set(from: u32, to: u32) -> RawIntSet {
	debug_assert!(from <= to);

	let from_block = word::block_of(from);
	let to_block = word::block_of(to);

	let mut appender = Appender::new();

	if from_block == to_block {
		let width = to - from + 1;
		let mask = if width == BLOCK_BITS {
			u32::MAX
		} else {
			((1u32 << width) - 1) << word::bit_in_block(from)
		};
		appender.append_literal(mask, from_block);
	} else {
		let head_mask = u32::MAX << word::bit_in_block(from);
		appender.append_literal(head_mask, from_block);

		let mut prefix = from_block + BLOCK_BITS;
		while prefix < to_block {
			appender.append_literal(u32::MAX, prefix);
			prefix += BLOCK_BITS;
		}

		let tail_bit = word::bit_in_block(to);
		let tail_mask = if tail_bit == 31 { u32::MAX } else { (1u32 << (tail_bit + 1)) - 1 };
		appender.append_literal(tail_mask, to_block);
	}

	appender.finish()
}

#[cfg(test)]
mod test;
