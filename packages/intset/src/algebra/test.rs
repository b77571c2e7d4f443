use super::*;

fn from_values(values: &[u32]) -> RawIntSet {
	let mut appender = intset_core::Appender::new();
	let mut sorted = values.to_vec();
	sorted.sort_unstable();
	sorted.dedup();
	for v in sorted {
		appender.append_element(v);
	}
	appender.finish()
}

fn to_values(raw: &RawIntSet) -> Vec<u32> {
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
fn sparse_intersection_matches_seed_scenario() {
	let a = from_values(&[4, 40, 3, 1, 11000]);
	let b = from_values(&[2, 4, 3, 10, 11, 20, 40]);

	let result = combine(&a, &b, BinaryOp::Intersection);
	assert_eq!(to_values(&result), vec![3, 4, 40]);
	assert_eq!(intersection_size(&a, &b), 3);
}

#[test]
fn union_merges_and_keeps_leftovers_from_both_sides() {
	let a = from_values(&[1, 2, 100]);
	let b = from_values(&[2, 3, 200]);

	let result = combine(&a, &b, BinaryOp::Union);
	assert_eq!(to_values(&result), vec![1, 2, 3, 100, 200]);
}

#[test]
fn difference_keeps_only_a_leftovers() {
	let a = from_values(&[1, 2, 3, 100]);
	let b = from_values(&[2, 200]);

	let result = combine(&a, &b, BinaryOp::Difference);
	assert_eq!(to_values(&result), vec![1, 3, 100]);
}

#[test]
fn symmetric_difference_keeps_both_sides_leftovers() {
	let a = from_values(&[1, 2, 3]);
	let b = from_values(&[2, 3, 4]);

	let result = combine(&a, &b, BinaryOp::SymmetricDifference);
	assert_eq!(to_values(&result), vec![1, 4]);
}

#[test]
fn intersection_size_capped_stops_early_without_undercounting_reachable_matches() {
	let a = from_values(&[1, 2, 3, 4, 5]);
	let b = from_values(&[1, 2, 3, 4, 5]);

	assert!(intersection_size_capped(&a, &b, 1) >= 1);
	assert_eq!(intersection_size(&a, &b), 5);
}

#[test]
fn combine_with_an_empty_side_behaves_like_identity_or_drop() {
	let a = from_values(&[5, 6, 7]);
	let empty = RawIntSet::new();

	assert_eq!(to_values(&combine(&a, &empty, BinaryOp::Union)), vec![5, 6, 7]);
	assert_eq!(to_values(&combine(&a, &empty, BinaryOp::Intersection)), Vec::<u32>::new());
	assert_eq!(to_values(&combine(&a, &empty, BinaryOp::Difference)), vec![5, 6, 7]);
}

#[test]
fn tight_run_combine_handles_runs_of_different_lengths() {
	let a = from_values(&(0..100).collect::<Vec<_>>());
	let b = from_values(&(50..150).collect::<Vec<_>>());

	let result = combine(&a, &b, BinaryOp::Intersection);
	assert_eq!(to_values(&result), (50..100).collect::<Vec<_>>());
}
