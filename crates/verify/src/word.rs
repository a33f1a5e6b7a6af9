// Copyright 2025 Irreducible Inc.

use std::fmt::{Debug, Display};

use mulcheck_arith::CheckedWideMul;
use rand::Rng;

/// 64-bit machine word, signed or unsigned, as seen by the oracle and the sweep driver.
///
/// The two implementors differ only in their range constants and in `NEG_ONE`, which is the one
/// place signedness leaks into the harness logic.
pub trait MulWord: CheckedWideMul + Copy + Eq + Debug + Display {
	const ZERO: Self;
	/// Smallest representable value; zero for unsigned words.
	const MIN: Self;
	const MAX: Self;
	/// `Some(-1)` for signed words, `None` where no negative values exist.
	const NEG_ONE: Option<Self>;

	fn wrapping_add(self, rhs: Self) -> Self;

	fn wrapping_mul(self, rhs: Self) -> Self;

	/// Truncating division. Callers must keep `rhs` nonzero and avoid `MIN / -1`.
	fn div_truncate(self, rhs: Self) -> Self;

	/// Halve toward zero. Repeated halving walks a word down its full dynamic range.
	fn halve(self) -> Self;

	/// Offset by a small signed delta, wrapping at the representable ends so that generating a
	/// boundary-adjacent value can never overflow the generator itself.
	fn offset(self, delta: i64) -> Self;

	fn random(rng: &mut impl Rng) -> Self;
}

macro_rules! impl_mul_word {
	($ty:ty, neg_one = $neg_one:expr) => {
		impl MulWord for $ty {
			const ZERO: Self = 0;
			const MIN: Self = <$ty>::MIN;
			const MAX: Self = <$ty>::MAX;
			const NEG_ONE: Option<Self> = $neg_one;

			#[inline]
			fn wrapping_add(self, rhs: Self) -> Self {
				self.wrapping_add(rhs)
			}

			#[inline]
			fn wrapping_mul(self, rhs: Self) -> Self {
				self.wrapping_mul(rhs)
			}

			#[inline]
			fn div_truncate(self, rhs: Self) -> Self {
				self / rhs
			}

			#[inline]
			fn halve(self) -> Self {
				self / 2
			}

			#[inline]
			fn offset(self, delta: i64) -> Self {
				// Sign extension makes the unsigned wrapping add equivalent to adding a
				// signed delta modulo 2^64.
				self.wrapping_add(delta as $ty)
			}

			fn random(rng: &mut impl Rng) -> Self {
				rng.gen()
			}
		}
	};
}

impl_mul_word!(i64, neg_one = Some(-1));
impl_mul_word!(u64, neg_one = None);
