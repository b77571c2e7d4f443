use std::collections::BTreeSet;

use intset::IntSet;

/// Applies a stream of pseudo-random operations to a pair of `IntSet`s and an
/// equivalent pair of `BTreeSet<u32>` oracles, then checks that every query
/// and set-algebra operation agrees between the two representations.
fn main() {
	afl::fuzz!(|data: &[u8]| {
		let mut a = IntSet::new();
		let mut b = IntSet::new();
		let mut oracle_a: BTreeSet<u32> = BTreeSet::new();
		let mut oracle_b: BTreeSet<u32> = BTreeSet::new();

		let mut chunks = data.chunks_exact(5);
		for chunk in &mut chunks {
			let opcode = chunk[0];
			let value = u32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);

			// Keep fuzzed values in a modest range so the run exercises
			// cross-block boundaries without spending all its time on
			// single, far-apart elements.
			let value = value % 4096;

			match opcode % 6 {
				0 => {
					a.add(value);
					oracle_a.insert(value);
				}
				1 => {
					a.remove(value);
					oracle_a.remove(&value);
				}
				2 => {
					b.add(value);
					oracle_b.insert(value);
				}
				3 => {
					b.remove(value);
					oracle_b.remove(&value);
				}
				4 => {
					a.flip(value);
					if !oracle_a.remove(&value) {
						oracle_a.insert(value);
					}
				}
				_ => {
					b.flip(value);
					if !oracle_b.remove(&value) {
						oracle_b.insert(value);
					}
				}
			}

			assert_elements_match(&a, &oracle_a);
			assert_elements_match(&b, &oracle_b);
		}

		assert_elements_match(&a.intersection(&b), &(&oracle_a & &oracle_b));
		assert_elements_match(&a.union(&b), &(&oracle_a | &oracle_b));
		assert_elements_match(&a.difference(&b), &(&oracle_a - &oracle_b));
		assert_elements_match(&a.symmetric_difference(&b), &(&oracle_a ^ &oracle_b));

		assert_eq!(a.size(), oracle_a.len());
		assert_eq!(a.intersection_size(&b), (&oracle_a & &oracle_b).len());
		assert_eq!(a.contains_any(&b), !(&oracle_a & &oracle_b).is_empty());

		if let (Some(&max_a), Some(&max_b)) = (oracle_a.iter().next_back(), oracle_b.iter().next_back()) {
			let ceiling = max_a.max(max_b);
			let mut full_a = a.clone();
			let mut full_b = b.clone();
			full_a.add(ceiling);
			full_b.add(ceiling);

			assert_eq!(full_a.complement().complement(), full_a);
		}
	});
}

fn assert_elements_match(set: &IntSet, oracle: &BTreeSet<u32>) {
	assert_eq!(set.iter().collect::<Vec<_>>(), oracle.iter().copied().collect::<Vec<_>>());
	assert_eq!(set.size(), oracle.len());
	for &v in oracle {
		assert!(set.contains(v));
	}
}
