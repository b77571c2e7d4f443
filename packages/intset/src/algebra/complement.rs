//! Single-cursor complement: produces every integer in `[0, last]` not
//! already present.

use intset_core::word::{self, BLOCK_BITS};
use intset_core::{Appender, Cursor, RawIntSet};

pub(crate) fn complement(raw: &RawIntSet) -> RawIntSet {
	let Some(last) = raw.cached_last() else {
		return RawIntSet::new();
	};

	let last_block_prefix = word::block_of(last);
	let last_bit = word::bit_in_block(last);
	let tail_mask = if last_bit == 31 { u32::MAX } else { (1u32 << (last_bit + 1)) - 1 };

	let mut cursor = Cursor::new(raw.words());
	let mut appender = Appender::with_word_capacity(raw.words().len() + 1);
	let mut next_expected_prefix = 0u32;
	let mut has_block = cursor.next();

	while has_block {
		let prefix = cursor.current_prefix();

		while next_expected_prefix < prefix {
			appender.append_literal(u32::MAX, next_expected_prefix);
			next_expected_prefix += BLOCK_BITS;
		}

		let complemented = if prefix == last_block_prefix {
			!cursor.current_literal() & tail_mask
		} else {
			!cursor.current_literal()
		};

		appender.append_literal(complemented, prefix);
		next_expected_prefix = prefix + BLOCK_BITS;

		has_block = cursor.next();
	}

	appender.finish()
}
