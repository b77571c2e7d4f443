use thiserror::Error;

/// An error reported by a fallible [`IntSet`](crate::IntSet) operation.
///
/// Every variant here corresponds to a caller-triggerable precondition
/// violation; none of them leave the target set mutated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntSetError {
	/// `fill`/`clear_range` were called with an inverted range (`from > to`).
	#[error("invalid range: from ({from}) is greater than to ({to})")]
	InvalidRange {
		/// The range's lower bound, as given by the caller.
		from: u32,
		/// The range's upper bound, as given by the caller.
		to: u32
	},
	/// `contains_at_least` was called with `n < 1`.
	#[error("invalid threshold: {n} (must be at least 1)")]
	InvalidThreshold {
		/// The threshold, as given by the caller.
		n: usize
	},
	/// `first`/`last` were called on an empty set.
	#[error("operation is undefined on an empty set")]
	EmptySet,
	/// `get(k)` was called with `k` outside `[0, size)`.
	#[error("index {index} is out of range for a set of size {size}")]
	IndexOutOfRange {
		/// The requested position.
		index: usize,
		/// The set's cardinality at the time of the call.
		size: usize
	}
}
