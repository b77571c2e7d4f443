use super::*;

fn to_values(raw: &RawIntSet) -> Vec<u32> {
	let mut out = Vec::new();
	let mut cursor = intset_core::Cursor::new(raw.words());
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
fn single_element_range() {
	assert_eq!(to_values(&range_literal_set(5, 5)), vec![5]);
}

#[test]
fn range_within_one_block() {
	assert_eq!(to_values(&range_literal_set(2, 6)), vec![2, 3, 4, 5, 6]);
}

#[test]
fn range_spanning_whole_blocks_compresses_to_a_run() {
	let raw = range_literal_set(0, 95);
	assert_eq!(to_values(&raw).len(), 96);
	assert_eq!(to_values(&raw).first(), Some(&0));
	assert_eq!(to_values(&raw).last(), Some(&95));
}

#[test]
fn range_aligned_exactly_to_block_boundaries() {
	let raw = range_literal_set(32, 63);
	let values = to_values(&raw);
	assert_eq!(values.len(), 32);
	assert_eq!(values[0], 32);
	assert_eq!(values[31], 63);
}

#[test]
fn range_is_a_subset_of_a_wider_range() {
	let narrow = to_values(&range_literal_set(10, 20));
	let wide = to_values(&range_literal_set(0, 100));
	assert!(narrow.iter().all(|v| wide.contains(v)));
}
