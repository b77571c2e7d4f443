use super::*;
use crate::word::encode_marker;

/// Words for {1, 3, 4, 40, 11000}: one marker at prefix 0 governing two
/// literals (blocks [0,31] and [32,63]), followed by a single-value marker
/// for 11000.
fn sample_words() -> Vec<u32> {
	vec![
		encode_marker(0, 1),
		0b1_1010,       // bits 1, 3, 4
		1 << 8,         // bit 8 of block [32,63] => value 40
		11000
	]
}

#[test]
fn walks_blocks_in_order() {
	let words = sample_words();
	let mut cursor = Cursor::new(&words);

	assert!(cursor.has_next());
	assert!(cursor.next());
	assert_eq!(cursor.current_prefix(), 0);
	assert!(!cursor.is_single_value());
	assert_eq!(cursor.current_literal(), 0b1_1010);
	assert_eq!(cursor.remaining_literals(), 1);

	assert!(cursor.next());
	assert_eq!(cursor.current_prefix(), 32);
	assert!(!cursor.is_single_value());
	assert_eq!(cursor.current_literal(), 1 << 8);
	assert_eq!(cursor.remaining_literals(), 0);

	assert!(cursor.next());
	assert_eq!(cursor.current_prefix(), word::prefix_of(11000));
	assert!(cursor.is_single_value());
	assert_eq!(cursor.current_literal(), word::literal_for(11000));

	assert!(!cursor.has_next());
	assert!(!cursor.next());
}

#[test]
fn fast_next_mirrors_next_inside_a_run() {
	let words = vec![encode_marker(0, 2), 1, 2, 4];
	let mut a = Cursor::new(&words);
	let mut b = Cursor::new(&words);

	a.next();
	b.next();
	assert_eq!(a.current_literal(), b.current_literal());

	a.next();
	b.fast_next();
	assert_eq!(a.current_prefix(), b.current_prefix());
	assert_eq!(a.current_literal(), b.current_literal());
	assert_eq!(a.remaining_literals(), b.remaining_literals());
}

#[test]
fn skip_all_before_jumps_within_a_run() {
	let words = vec![encode_marker(0, 3), 1, 1, 1, 1];
	let mut cursor = Cursor::new(&words);
	cursor.next();
	assert_eq!(cursor.current_prefix(), 0);

	assert!(cursor.skip_all_before(96));
	assert_eq!(cursor.current_prefix(), 96);
	assert_eq!(cursor.remaining_literals(), 0);
}

#[test]
fn skip_all_before_crosses_into_next_marker() {
	let words = sample_words();
	let mut cursor = Cursor::new(&words);
	cursor.next();

	assert!(cursor.skip_all_before(word::prefix_of(11000)));
	assert!(cursor.is_single_value());
	assert_eq!(cursor.current_literal(), word::literal_for(11000));
}

#[test]
fn skip_all_before_can_exhaust_the_cursor() {
	let words = sample_words();
	let mut cursor = Cursor::new(&words);
	cursor.next();

	assert!(!cursor.skip_all_before(u32::MAX - 31));
}

#[test]
fn empty_cursor_has_no_next() {
	let words: Vec<u32> = Vec::new();
	let cursor = Cursor::new(&words);
	assert!(!cursor.has_next());
}
