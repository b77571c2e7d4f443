use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;

use intset_core::word::{self, BLOCK_BITS};
use intset_core::{Appender, Cursor, RawIntSet, ReverseCursor};
use log::trace;

use crate::algebra::{self, BinaryOp, complement, range};
use crate::error::IntSetError;
use crate::iter::{Iter, RevIter};

/// A compressed set of non-negative 32-bit integers.
///
/// Internally, `IntSet` is a thin, owning wrapper around [`RawIntSet`]: the
/// word buffer and its cached scalars. Every operation here either walks
/// that buffer directly (queries, in-place single-element mutation) or
/// drives the two-cursor algebra kernel in [`crate::algebra`] to build a
/// replacement buffer.
#[derive(Clone, Default)]
pub struct IntSet {
	raw: RawIntSet
}

impl IntSet {
	/// Builds the empty set.
	pub fn new() -> Self {
		Self { raw: RawIntSet::new() }
	}

	pub(crate) fn from_raw(raw: RawIntSet) -> Self {
		Self { raw }
	}

	pub(crate) fn raw(&self) -> &RawIntSet {
		&self.raw
	}

	fn replace_raw(&mut self, raw: RawIntSet) {
		self.raw = raw;
	}

	// ---- queries ----

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.raw.is_empty()
	}

	/// The set's cardinality. `O(words)` the first time it is computed after
	/// a mutation that invalidates the cache, `O(1)` afterwards.
	pub fn size(&self) -> usize {
		if let Some(size) = self.raw.cached_size() {
			return size;
		}

		let mut cursor = Cursor::new(self.raw.words());
		let mut count = 0usize;
		while cursor.next() {
			count += cursor.current_literal().count_ones() as usize;
		}

		self.raw.set_size(count);
		count
	}

	pub fn contains(&self, i: u32) -> bool {
		let mut cursor = Cursor::new(self.raw.words());
		if !cursor.next() {
			return false;
		}

		let target_prefix = word::block_of(i);
		if !cursor.skip_all_before(target_prefix) || cursor.current_prefix() != target_prefix {
			return false;
		}

		cursor.current_literal() & (1 << word::bit_in_block(i)) != 0
	}

	pub fn first(&self) -> Result<u32, IntSetError> {
		let mut cursor = Cursor::new(self.raw.words());
		if !cursor.next() {
			return Err(IntSetError::EmptySet);
		}

		Ok(cursor.current_prefix() + cursor.current_literal().trailing_zeros())
	}

	pub fn last(&self) -> Result<u32, IntSetError> {
		self.raw.cached_last().ok_or(IntSetError::EmptySet)
	}

	/// Returns the `k`-th smallest element (0-indexed).
	pub fn get(&self, k: usize) -> Result<u32, IntSetError> {
		let size = self.size();
		if k >= size {
			return Err(IntSetError::IndexOutOfRange { index: k, size });
		}

		let mut cursor = Cursor::new(self.raw.words());
		let mut seen = 0usize;

		while cursor.next() {
			let population = cursor.current_literal().count_ones() as usize;
			if seen + population > k {
				let mut bits = cursor.current_literal();
				let mut remaining = k - seen;
				loop {
					let bit = bits.trailing_zeros();
					if remaining == 0 {
						return Ok(cursor.current_prefix() + bit);
					}
					bits &= bits - 1;
					remaining -= 1;
				}
			}
			seen += population;
		}

		unreachable!("k < size implies the cursor yields at least k + 1 elements")
	}

	/// Returns the rank (0-indexed position) of `v`, if present.
	pub fn index_of(&self, v: u32) -> Option<usize> {
		let target_prefix = word::block_of(v);
		let offset = word::bit_in_block(v);

		let mut cursor = Cursor::new(self.raw.words());
		let mut seen = 0usize;

		while cursor.next() {
			if cursor.current_prefix() > target_prefix {
				return None;
			}

			if cursor.current_prefix() == target_prefix {
				let literal = cursor.current_literal();
				if literal & (1 << offset) == 0 {
					return None;
				}

				let below_mask = if offset == 0 { 0 } else { (1u32 << offset) - 1 };
				return Some(seen + (literal & below_mask).count_ones() as usize);
			}

			seen += cursor.current_literal().count_ones() as usize;
		}

		None
	}

	pub fn contains_all(&self, other: &IntSet) -> bool {
		algebra::intersection_size(&self.raw, &other.raw) == other.size()
	}

	pub fn contains_any(&self, other: &IntSet) -> bool {
		algebra::intersection_size_capped(&self.raw, &other.raw, 1) >= 1
	}

	pub fn contains_at_least(&self, other: &IntSet, n: usize) -> Result<bool, IntSetError> {
		if n < 1 {
			return Err(IntSetError::InvalidThreshold { n });
		}

		Ok(algebra::intersection_size_capped(&self.raw, &other.raw, n) >= n)
	}

	pub fn intersection_size(&self, other: &IntSet) -> usize {
		algebra::intersection_size(&self.raw, &other.raw)
	}

	pub fn union_size(&self, other: &IntSet) -> usize {
		self.size() + other.size() - self.intersection_size(other)
	}

	pub fn difference_size(&self, other: &IntSet) -> usize {
		self.size() - self.intersection_size(other)
	}

	pub fn symmetric_difference_size(&self, other: &IntSet) -> usize {
		self.size() + other.size() - 2 * self.intersection_size(other)
	}

	pub fn complement_size(&self) -> Result<usize, IntSetError> {
		let last = self.last()?;
		Ok(last as usize - self.size() + 1)
	}

	/// `active words / ceil((last + 1) / 32)`, `0.0` for the empty set.
	pub fn bitmap_compression_ratio(&self) -> f64 {
		match self.raw.cached_last() {
			None => 0.0,
			Some(last) => {
				let bitmap_words = (last as u64 + 1).div_ceil(u64::from(BLOCK_BITS));
				self.raw.words().len() as f64 / bitmap_words as f64
			}
		}
	}

	/// `active words / size`, `0.0` for the empty set.
	pub fn collection_compression_ratio(&self) -> f64 {
		let size = self.size();
		if size == 0 {
			0.0
		} else {
			self.raw.words().len() as f64 / size as f64
		}
	}

	// ---- iteration ----

	pub fn iter(&self) -> Iter<'_> {
		Iter::new(self.raw.words())
	}

	pub fn iter_rev(&self) -> RevIter {
		RevIter::new(self.raw.words())
	}

	// ---- single-element mutation ----

	fn singleton(i: u32) -> RawIntSet {
		let mut appender = Appender::new();
		appender.append_element(i);
		appender.finish()
	}

	/// Adds `i`, returning whether the set changed.
	pub fn add(&mut self, i: u32) -> bool {
		match self.raw.cached_last() {
			None => {
				self.raw = Self::singleton(i);
				true
			}
			Some(last) if i > last => {
				trace!("appending new tail element {i} past last={last}");
				let mut appender = Appender::resume(mem::take(&mut self.raw));
				appender.append_element(i);
				self.raw = appender.finish();
				true
			}
			Some(last) if i == last => false,
			Some(_) => {
				if self.contains(i) {
					false
				} else {
					let singleton = Self::singleton(i);
					self.replace_raw(algebra::combine(&self.raw, &singleton, BinaryOp::Union));
					true
				}
			}
		}
	}

	/// Removes `i`, returning whether the set changed.
	pub fn remove(&mut self, i: u32) -> bool {
		if !self.contains(i) {
			return false;
		}

		let singleton = Self::singleton(i);
		self.replace_raw(algebra::combine(&self.raw, &singleton, BinaryOp::Difference));
		true
	}

	/// Toggles membership of `i`, returning the new membership state.
	pub fn flip(&mut self, i: u32) -> bool {
		if self.contains(i) {
			self.remove(i);
			false
		} else {
			self.add(i);
			true
		}
	}

	pub fn clear(&mut self) {
		self.raw = RawIntSet::new();
	}

	pub fn fill(&mut self, from: u32, to: u32) -> Result<(), IntSetError> {
		if from > to {
			return Err(IntSetError::InvalidRange { from, to });
		}

		let filled = range::range_literal_set(from, to);
		self.replace_raw(algebra::combine(&self.raw, &filled, BinaryOp::Union));
		Ok(())
	}

	/// Clears every element in `[from, to]`. Named distinctly from the
	/// niladic [`Self::clear`] to avoid a method-name collision.
	pub fn clear_range(&mut self, from: u32, to: u32) -> Result<(), IntSetError> {
		if from > to {
			return Err(IntSetError::InvalidRange { from, to });
		}

		let cleared = range::range_literal_set(from, to);
		self.replace_raw(algebra::combine(&self.raw, &cleared, BinaryOp::Difference));
		Ok(())
	}

	pub fn add_all(&mut self, other: &IntSet) {
		self.replace_raw(algebra::combine(&self.raw, &other.raw, BinaryOp::Union));
	}

	pub fn remove_all(&mut self, other: &IntSet) {
		self.replace_raw(algebra::combine(&self.raw, &other.raw, BinaryOp::Difference));
	}

	pub fn retain_all(&mut self, other: &IntSet) {
		self.replace_raw(algebra::combine(&self.raw, &other.raw, BinaryOp::Intersection));
	}

	pub fn complement_mut(&mut self) {
		self.raw = complement::complement(&self.raw);
	}

	pub fn replace_with(&mut self, other: &IntSet) {
		self.raw = other.raw.clone();
	}

	// ---- pure construction ----

	pub fn intersection(&self, other: &IntSet) -> IntSet {
		if core::ptr::eq(self, other) {
			return self.clone();
		}
		Self::from_raw(algebra::combine(&self.raw, &other.raw, BinaryOp::Intersection))
	}

	pub fn union(&self, other: &IntSet) -> IntSet {
		if core::ptr::eq(self, other) {
			return self.clone();
		}
		Self::from_raw(algebra::combine(&self.raw, &other.raw, BinaryOp::Union))
	}

	pub fn difference(&self, other: &IntSet) -> IntSet {
		if core::ptr::eq(self, other) {
			return Self::new();
		}
		Self::from_raw(algebra::combine(&self.raw, &other.raw, BinaryOp::Difference))
	}

	pub fn symmetric_difference(&self, other: &IntSet) -> IntSet {
		if core::ptr::eq(self, other) {
			return Self::new();
		}
		Self::from_raw(algebra::combine(&self.raw, &other.raw, BinaryOp::SymmetricDifference))
	}

	pub fn complement(&self) -> IntSet {
		Self::from_raw(complement::complement(&self.raw))
	}

	// ---- serialization (optional, not part of the core contract) ----

	/// Serializes the active word region as little-endian bytes.
	pub fn to_le_bytes(&self) -> Vec<u8> {
		let mut bytes = Vec::with_capacity(self.raw.words().len() * 4);
		for word in self.raw.words() {
			bytes.extend_from_slice(&word.to_le_bytes());
		}
		bytes
	}

	/// Rebuilds a set from bytes previously produced by [`Self::to_le_bytes`].
	///
	/// Any trailing bytes that don't make up a whole word are ignored. This
	/// is not a general-purpose parser: it expects a canonical word sequence
	/// and re-derives canonical form through the same appender every other
	/// constructor uses, rather than validating the input's structure.
	pub fn from_le_bytes(bytes: &[u8]) -> Self {
		let words: Vec<u32> = bytes
			.chunks_exact(4)
			.map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
			.collect();

		let mut appender = Appender::with_word_capacity(words.len());
		let mut source_cursor = Cursor::new(&words);
		while source_cursor.next() {
			appender.append_literal(source_cursor.current_literal(), source_cursor.current_prefix());
		}

		Self::from_raw(appender.finish())
	}
}

impl FromIterator<u32> for IntSet {
	fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
		let mut values: Vec<u32> = iter.into_iter().collect();
		values.sort_unstable();
		values.dedup();

		let mut appender = Appender::with_word_capacity(values.len() / 16 + 1);
		for value in values {
			appender.append_element(value);
		}

		Self::from_raw(appender.finish())
	}
}

impl PartialEq for IntSet {
	fn eq(&self, other: &Self) -> bool {
		core::ptr::eq(self, other) || self.raw.words() == other.raw.words()
	}
}

impl Eq for IntSet {}

impl Hash for IntSet {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.raw.words().hash(state);
	}
}

fn compare_literal_descending(a: u32, b: u32) -> Ordering {
	let diff = a ^ b;
	let highest = 31 - diff.leading_zeros();
	if (a >> highest) & 1 == 1 { Ordering::Greater } else { Ordering::Less }
}

impl PartialOrd for IntSet {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for IntSet {
	/// Compares as if each set were its descending sequence of elements:
	/// the first differing element (scanning from the largest down)
	/// decides, with a shorter sequence that is a strict prefix of the
	/// other comparing as lesser.
	fn cmp(&self, other: &Self) -> Ordering {
		if core::ptr::eq(self, other) {
			return Ordering::Equal;
		}

		let mut a = ReverseCursor::new(self.raw.words());
		let mut b = ReverseCursor::new(other.raw.words());

		loop {
			let has_a = a.next();
			let has_b = b.next();

			match (has_a, has_b) {
				(false, false) => return Ordering::Equal,
				(false, true) => return Ordering::Less,
				(true, false) => return Ordering::Greater,
				(true, true) => {}
			}

			if a.current_prefix() != b.current_prefix() {
				return a.current_prefix().cmp(&b.current_prefix());
			}

			if a.current_literal() != b.current_literal() {
				return compare_literal_descending(a.current_literal(), b.current_literal());
			}
		}
	}
}

impl fmt::Debug for IntSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		crate::debug::fmt_words(self.raw.words(), f)
	}
}

macro_rules! impl_set_op {
	($trait:ident, $method:ident, $op:expr) => {
		impl core::ops::$trait<&IntSet> for &IntSet {
			type Output = IntSet;

			fn $method(self, rhs: &IntSet) -> IntSet {
				IntSet::from_raw(algebra::combine(&self.raw, &rhs.raw, $op))
			}
		}
	};
}

impl_set_op!(BitAnd, bitand, BinaryOp::Intersection);
impl_set_op!(BitOr, bitor, BinaryOp::Union);
impl_set_op!(Sub, sub, BinaryOp::Difference);
impl_set_op!(BitXor, bitxor, BinaryOp::SymmetricDifference);
