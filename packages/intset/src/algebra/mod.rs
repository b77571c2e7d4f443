//! The two-cursor algebra kernel. Every binary set operation — intersection,
//! union, difference, symmetric difference, and their size-only cousins —
//! is a variation on the same aligned-walk driver.

pub mod complement;
pub mod range;

use intset_core::{Appender, Cursor, RawIntSet};

/// Which bitwise combination, and which gap-handling/tail policy, a call to
/// [`combine`] should use. Mirrors the per-operation table: what happens
/// when one cursor is behind the other, and what happens to whatever is
/// left once one side is exhausted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum BinaryOp {
	Intersection,
	Union,
	Difference,
	SymmetricDifference
}

impl BinaryOp {
	#[inline]
	fn combine_literals(self, a: u32, b: u32) -> u32 {
		match self {
			BinaryOp::Intersection => a & b,
			BinaryOp::Union => a | b,
			BinaryOp::Difference => a & !b,
			BinaryOp::SymmetricDifference => a ^ b
		}
	}

	/// Whether a block only `a` has (no counterpart in `b`, or `b` already
	/// exhausted) is copied through to the output.
	#[inline]
	fn keeps_a_only_block(self) -> bool {
		!matches!(self, BinaryOp::Intersection)
	}

	/// Whether a block only `b` has is copied through to the output.
	#[inline]
	fn keeps_b_only_block(self) -> bool {
		matches!(self, BinaryOp::Union | BinaryOp::SymmetricDifference)
	}
}

/// Runs the shared binary-operation driver: walks `a` and `b` in lockstep by
/// block prefix, combining aligned blocks with `op`'s bitwise combinator and
/// following `op`'s gap/tail policy for blocks only one side has.
pub(crate) fn combine(a: &RawIntSet, b: &RawIntSet, op: BinaryOp) -> RawIntSet {
	let capacity = match op {
		BinaryOp::Intersection => a.words().len().min(b.words().len()) + 1,
		BinaryOp::Union | BinaryOp::SymmetricDifference => a.words().len().max(b.words().len()) + 1,
		BinaryOp::Difference => a.words().len() + 1
	};

	let mut cursor_a = Cursor::new(a.words());
	let mut cursor_b = Cursor::new(b.words());
	let mut appender = Appender::with_word_capacity(capacity);

	let mut has_a = cursor_a.next();
	let mut has_b = cursor_b.next();

	while has_a && has_b {
		let prefix_a = cursor_a.current_prefix();
		let prefix_b = cursor_b.current_prefix();

		if prefix_a < prefix_b {
			if op.keeps_a_only_block() {
				appender.append_literal(cursor_a.current_literal(), prefix_a);
				has_a = cursor_a.next();
			} else {
				has_a = cursor_a.skip_all_before(prefix_b);
			}
			continue;
		}

		if prefix_b < prefix_a {
			if op.keeps_b_only_block() {
				appender.append_literal(cursor_b.current_literal(), prefix_b);
				has_b = cursor_b.next();
			} else {
				has_b = cursor_b.skip_all_before(prefix_a);
			}
			continue;
		}

		appender.append_literal(op.combine_literals(cursor_a.current_literal(), cursor_b.current_literal()), prefix_a);

		while cursor_a.remaining_literals() > 0 && cursor_b.remaining_literals() > 0 {
			cursor_a.fast_next();
			cursor_b.fast_next();
			appender.append_literal(
				op.combine_literals(cursor_a.current_literal(), cursor_b.current_literal()),
				cursor_a.current_prefix()
			);
		}

		has_a = cursor_a.next();
		has_b = cursor_b.next();
	}

	while has_a && op.keeps_a_only_block() {
		appender.append_literal(cursor_a.current_literal(), cursor_a.current_prefix());
		has_a = cursor_a.next();
	}

	while has_b && op.keeps_b_only_block() {
		appender.append_literal(cursor_b.current_literal(), cursor_b.current_prefix());
		has_b = cursor_b.next();
	}

	appender.finish()
}

/// Counts the size of `a ∩ b` without materializing it, stopping as soon as
/// the running count reaches `cap` (the exact count is returned if it never
/// does). Powers [`contains_any`], [`contains_at_least`], and the exact
/// `intersection_size`.
pub(crate) fn intersection_size_capped(a: &RawIntSet, b: &RawIntSet, cap: usize) -> usize {
	let mut cursor_a = Cursor::new(a.words());
	let mut cursor_b = Cursor::new(b.words());

	let mut has_a = cursor_a.next();
	let mut has_b = cursor_b.next();
	let mut count = 0usize;

	while has_a && has_b {
		if count >= cap {
			return count;
		}

		let prefix_a = cursor_a.current_prefix();
		let prefix_b = cursor_b.current_prefix();

		if prefix_a < prefix_b {
			has_a = cursor_a.skip_all_before(prefix_b);
			continue;
		}

		if prefix_b < prefix_a {
			has_b = cursor_b.skip_all_before(prefix_a);
			continue;
		}

		count += (cursor_a.current_literal() & cursor_b.current_literal()).count_ones() as usize;

		while cursor_a.remaining_literals() > 0 && cursor_b.remaining_literals() > 0 {
			cursor_a.fast_next();
			cursor_b.fast_next();
			count += (cursor_a.current_literal() & cursor_b.current_literal()).count_ones() as usize;
		}

		has_a = cursor_a.next();
		has_b = cursor_b.next();
	}

	count
}

pub(crate) fn intersection_size(a: &RawIntSet, b: &RawIntSet) -> usize {
	intersection_size_capped(a, b, usize::MAX)
}

#[cfg(test)]
mod test;
