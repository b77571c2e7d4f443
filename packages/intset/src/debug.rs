//! The structured per-word `Debug` dump: one line per active word, with its
//! index, raw hex value, and decoded meaning.

use core::fmt;

use intset_core::word;

pub(crate) fn fmt_words(words: &[u32], f: &mut fmt::Formatter<'_>) -> fmt::Result {
	if !f.alternate() {
		return write!(f, "IntSet {{ {} words }}", words.len());
	}

	writeln!(f, "IntSet [")?;

	let mut i = 0usize;
	while i < words.len() {
		let w = words[i];

		if word::is_single_value(w) {
			writeln!(f, "  [{i}] {w:#010x}  single-value {}", word::decode_single_value(w))?;
			i += 1;
		} else {
			let prefix = word::prefix_of(w);
			let count = word::literal_count_of_marker(w) + 1;
			writeln!(f, "  [{i}] {w:#010x}  marker prefix={prefix} literals={count}")?;
			i += 1;

			for _ in 0..count {
				if i >= words.len() {
					break;
				}
				writeln!(f, "  [{i}] {:#010x}  literal", words[i])?;
				i += 1;
			}
		}
	}

	write!(f, "]")
}
