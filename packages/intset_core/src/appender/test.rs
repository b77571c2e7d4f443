use super::*;
use crate::cursor::Cursor;

fn elements_of(raw: &RawIntSet) -> Vec<u32> {
	let mut out = Vec::new();
	let mut cursor = Cursor::new(raw.words());

	while cursor.next() {
		let mut bits = cursor.current_literal();
		while bits != 0 {
			let bit = bits.trailing_zeros();
			out.push(cursor.current_prefix() + bit);
			bits &= bits - 1;
		}
	}

	out
}

#[test]
fn appending_elements_builds_the_spec_seed_scenario() {
	// append_element requires a strictly ascending sequence, so the seed
	// scenario's insertion order (4, 40, 3, 1, 11000) is sorted first, as
	// any real caller building from unordered input would.
	let mut appender = Appender::new();
	for i in [1u32, 3, 4, 40, 11000] {
		appender.append_element(i);
	}
	let raw = appender.finish();

	assert_eq!(elements_of(&raw), vec![1, 3, 4, 40, 11000]);
	assert_eq!(raw.cached_last(), Some(11000));
	assert_eq!(raw.cached_size(), Some(5));
}

#[test]
fn single_element_block_opens_as_single_value_marker() {
	let mut appender = Appender::new();
	appender.append_element(11000);
	let raw = appender.finish();

	assert_eq!(raw.words().len(), 1);
	assert_eq!(raw.words()[0], 11000);
}

#[test]
fn second_element_in_same_block_promotes_to_a_literal() {
	let mut appender = Appender::new();
	appender.append_element(1);
	appender.append_element(3);
	let raw = appender.finish();

	assert_eq!(raw.words().len(), 2);
	assert_eq!(elements_of(&raw), vec![1, 3]);
}

#[test]
fn a_single_value_tail_stays_single_value_when_the_next_element_is_in_a_distant_block() {
	let mut appender = Appender::new();
	appender.append_element(1);
	appender.append_element(1000);
	let raw = appender.finish();

	// Both blocks hold exactly one element, so the canonical encoding is two
	// single-value markers, never a one-literal marker for either.
	assert_eq!(raw.words().len(), 2);
	assert_eq!(raw.words()[0], 1);
	assert_eq!(raw.words()[1], 1000);
	assert_eq!(elements_of(&raw), vec![1, 1000]);
}

#[test]
fn contiguous_blocks_share_one_marker() {
	let mut appender = Appender::new();
	// fill(0, 63): two full blocks, contiguous
	for i in 0..64u32 {
		appender.append_element(i);
	}
	let raw = appender.finish();

	// One marker + two literal words
	assert_eq!(raw.words().len(), 3);
	assert_eq!(raw.cached_last(), Some(63));
	assert_eq!(elements_of(&raw).len(), 64);
}

#[test]
fn a_marker_holds_at_most_32_literals() {
	let mut appender = Appender::new();
	// One element per block, 40 blocks: forces more than one marker
	for block in 0..40u32 {
		appender.append_element(block * 32);
	}
	let raw = appender.finish();

	assert_eq!(elements_of(&raw).len(), 40);
	assert_eq!(raw.cached_last(), Some(39 * 32));
}

#[test]
fn append_literal_merges_runs_and_drops_zero_literals() {
	let mut appender = Appender::new();
	appender.append_literal(0, 0); // no-op
	appender.append_literal(0b101, 0);
	appender.append_literal(0b1, 32);
	let raw = appender.finish();

	assert_eq!(elements_of(&raw), vec![0, 2, 32]);
}

#[test]
fn append_literal_opens_single_value_marker_for_lone_bits() {
	let mut appender = Appender::new();
	appender.append_literal(1 << 5, 0); // single bit, standalone block
	let raw = appender.finish();

	assert_eq!(raw.words().len(), 1);
	assert_eq!(raw.words()[0], 5);
}

#[test]
fn append_all_stops_at_the_limit_prefix() {
	let source_words = {
		let mut a = Appender::new();
		for i in [0u32, 32, 64, 96] {
			a.append_element(i);
		}
		a.finish()
	};

	let mut cursor = Cursor::new(source_words.words());
	cursor.next();

	let mut appender = Appender::new();
	let reached_limit = appender.append_all(&mut cursor, 64);
	assert!(reached_limit);
	assert_eq!(cursor.current_prefix(), 64);

	let raw = appender.finish();
	assert_eq!(elements_of(&raw), vec![0, 32]);
}

#[test]
fn append_all_drains_to_exhaustion_with_unbounded_limit() {
	let source_words = {
		let mut a = Appender::new();
		for i in [0u32, 32, 64] {
			a.append_element(i);
		}
		a.finish()
	};

	let mut cursor = Cursor::new(source_words.words());
	cursor.next();

	let mut appender = Appender::new();
	let reached_limit = appender.append_all(&mut cursor, u32::MAX);
	assert!(!reached_limit);

	let raw = appender.finish();
	assert_eq!(elements_of(&raw), vec![0, 32, 64]);
}
