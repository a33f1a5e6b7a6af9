// Copyright 2025 Irreducible Inc.

//! Overflow-checked 64-bit multiplication via a floating-point probe.
//!
//! Both implementations follow the same three-step scheme:
//!
//! 1. Compute the product modulo $2^{64}$ with a wrapping multiply. This is the value returned
//!    in all cases and is exact two's-complement / unsigned modular arithmetic.
//! 2. Convert both operands to `f32` and multiply. Each conversion carries a relative error of
//!    at most $2^{-23}$ under any IEEE rounding mode, and the product rounding adds one more, so
//!    the approximation tracks the true product within a relative error of about
//!    $3 \cdot 2^{-23}$.
//! 3. Compare the wrapped product against the approximation. Without overflow the two quantities
//!    describe the same real number and differ by at most roughly
//!    $3 \cdot 2^{63} \cdot 2^{-23} \approx 2^{41.6}$. With overflow the wrapped product is
//!    displaced from the true product by a nonzero multiple of $2^{64}$, while the approximation
//!    still tracks the true product, so the observed gap is at least $2^{63}$ even in the
//!    boundary case.
//!
//! Any threshold strictly between those two bounds makes the comparison an exact overflow
//! discriminator; [`OVERFLOW_THRESHOLD`] sits at the midpoint $2^{48}$. The precision gap
//! between `f32` and the 64-bit operands is what creates the window, so the probe must stay in
//! single precision.

/// Decision threshold separating floating-point round-off from a genuine wraparound.
///
/// Valid anywhere in roughly $[2^{42}, 2^{62}]$; kept at $2^{48}$, the constant the scheme was
/// derived with.
pub const OVERFLOW_THRESHOLD: f32 = (1u64 << 48) as f32;

/// 64-bit multiplication that reports overflow without dividing.
///
/// Total over the full operand domain: every pair of words has a well-defined modular product
/// and overflow flag, and no input panics or errs.
pub trait CheckedWideMul: Sized + Copy {
	/// Returns the product modulo $2^{64}$ in the word's own representation, together with a
	/// flag that is `true` iff the infinite-precision product is not representable.
	///
	/// The returned product is the canonical wraparound result and does not depend on the flag.
	fn mul_with_overflow(self, rhs: Self) -> (Self, bool);
}

impl CheckedWideMul for i64 {
	#[inline]
	fn mul_with_overflow(self, rhs: Self) -> (Self, bool) {
		// wrapping_mul is guaranteed two's-complement modular arithmetic, the bit-exact
		// equivalent of multiplying the operands' bit patterns as u64 and reinterpreting.
		let wrapped = self.wrapping_mul(rhs);
		let approx = self as f32 * rhs as f32;
		let overflowed = (wrapped as f32 - approx).abs() > OVERFLOW_THRESHOLD;
		(wrapped, overflowed)
	}
}

impl CheckedWideMul for u64 {
	#[inline]
	fn mul_with_overflow(self, rhs: Self) -> (Self, bool) {
		let wrapped = self.wrapping_mul(rhs);
		// For operands near 2^64 the probe product exceeds f32::MAX and rounds to infinity;
		// the comparison still classifies those pairs as overflow, which is always correct
		// since such products are far outside the representable range.
		let approx = self as f32 * rhs as f32;
		let overflowed = (wrapped as f32 - approx).abs() > OVERFLOW_THRESHOLD;
		(wrapped, overflowed)
	}
}
