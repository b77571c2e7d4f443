//! Bit-level meaning of the 32-bit words that make up a compressed set, and
//! the small predicates used throughout the cursor and appender to decode
//! them.
//!
//! Every word is either a *marker* (MSB set) or a *single-value marker*
//! (MSB clear). Concretely:
//!
//! | MSB | Kind                 | Remaining 31 bits                          |
//! |-----|----------------------|---------------------------------------------|
//! | 0   | Single-value marker  | the integer value itself                    |
//! | 1   | Marker               | bits 30..5 = block prefix, bits 4..0 = `k`  |
//!
//! A marker with literal-count `k` is always immediately followed by `k + 1`
//! raw literal words, one per consecutive 32-value block starting at the
//! marker's prefix. A literal word's 32 bits are simply the block's
//! characteristic bitmap; literals never have their MSB reserved for
//! anything.

/// The bit that distinguishes a marker (set) from a single-value marker
/// (clear).
pub const MARKER_BIT: u32 = 0x8000_0000;

/// Mask that isolates a marker's or single-value's block prefix: the top 26
/// bits of the word, with the low 5 bits (in-block offset / literal count)
/// cleared.
pub const PREFIX_MASK: u32 = 0x7FFF_FFE0;

/// Mask that isolates a marker's literal-count field.
pub const LITERAL_COUNT_MASK: u32 = 0x1F;

/// Number of integers covered by one block / one literal word.
pub const BLOCK_BITS: u32 = 32;

/// Maximum number of literal words that may follow a single marker before a
/// new marker must be opened.
pub const MAX_LITERALS_PER_MARKER: u32 = 32;

/// Returns `true` if `w` is a single-value marker, i.e. its own numeric value
/// is the sole element of the block it represents.
#[inline]
pub const fn is_single_value(w: u32) -> bool {
	w & MARKER_BIT == 0
}

/// Returns the block prefix encoded in `w`, valid for both markers and
/// single-value markers (a single-value word's low 5 bits are its in-block
/// offset, so masking them off yields the same prefix a marker would carry
/// for that block).
#[inline]
pub const fn prefix_of(w: u32) -> u32 {
	w & PREFIX_MASK
}

/// Returns the literal-count field of a marker word. Only meaningful when
/// `w` is not a single-value marker.
#[inline]
pub const fn literal_count_of_marker(w: u32) -> u32 {
	w & LITERAL_COUNT_MASK
}

/// Returns the integer value represented by a single-value marker word.
#[inline]
pub const fn decode_single_value(w: u32) -> u32 {
	w
}

/// Builds a marker word for the given block `prefix` (must be a multiple of
/// [`BLOCK_BITS`]) with `k` attached literals (must be in `0..=31`).
#[inline]
pub const fn encode_marker(prefix: u32, k: u32) -> u32 {
	debug_assert!(prefix & !PREFIX_MASK == 0);
	debug_assert!(k <= LITERAL_COUNT_MASK);
	MARKER_BIT | prefix | k
}

/// Returns `true` if the literal `l` has exactly one bit set.
#[inline]
pub const fn contains_only_one_bit(l: u32) -> bool {
	l != 0 && l & (l - 1) == 0
}

/// Returns the block prefix that contains `value`, i.e. `value` rounded down
/// to a multiple of [`BLOCK_BITS`].
#[inline]
pub const fn block_of(value: u32) -> u32 {
	value & !(BLOCK_BITS - 1)
}

/// Returns the 0..32 offset of `value` within its block.
#[inline]
pub const fn bit_in_block(value: u32) -> u32 {
	value & (BLOCK_BITS - 1)
}

/// Returns the literal word with only the bit for `value` set.
#[inline]
pub const fn literal_for(value: u32) -> u32 {
	1u32 << bit_in_block(value)
}

#[cfg(test)]
mod test;
