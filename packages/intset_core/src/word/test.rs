use super::*;

#[test]
fn single_value_words_are_recognized() {
	assert!(is_single_value(0));
	assert!(is_single_value(11000));
	assert!(!is_single_value(encode_marker(0, 0)));
}

#[test]
fn prefix_of_agrees_for_markers_and_single_values() {
	assert_eq!(prefix_of(encode_marker(0, 3)), 0);
	assert_eq!(prefix_of(encode_marker(64, 0)), 64);
	// Single-value word 40 belongs to the block [32, 63]
	assert_eq!(prefix_of(40), 32);
	assert_eq!(prefix_of(4), 0);
}

#[test]
fn literal_count_round_trips() {
	for k in 0..=31u32 {
		let w = encode_marker(32, k);
		assert!(!is_single_value(w));
		assert_eq!(literal_count_of_marker(w), k);
		assert_eq!(prefix_of(w), 32);
	}
}

#[test]
fn single_bit_literals_are_detected() {
	assert!(contains_only_one_bit(1));
	assert!(contains_only_one_bit(1 << 17));
	assert!(!contains_only_one_bit(0));
	assert!(!contains_only_one_bit(0b11));
	assert!(!contains_only_one_bit(u32::MAX));
}

#[test]
fn block_and_bit_in_block_decompose_values() {
	assert_eq!(block_of(40), 32);
	assert_eq!(bit_in_block(40), 8);
	assert_eq!(literal_for(40), 1 << 8);
	assert_eq!(block_of(0), 0);
	assert_eq!(bit_in_block(0), 0);
}
