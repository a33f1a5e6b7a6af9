// Copyright 2025 Irreducible Inc.

use crate::word::MulWord;

/// Division-based reference for overflow-checked 64-bit multiplication.
///
/// Trusted oracle for the float-probe multiply: slower, but simple enough to be obviously
/// correct. The wrapped product divided by a nonzero `x` recovers `y` exactly iff nothing was
/// lost to wraparound.
pub fn reference_mul<W: MulWord>(x: W, y: W) -> (W, bool) {
	let wrapped = x.wrapping_mul(y);
	if x == W::ZERO {
		return (wrapped, false);
	}
	if W::NEG_ONE == Some(x) {
		// The back-dividing check cannot be used here: MIN / -1 is itself the one division
		// that overflows. Negating MIN is also the only product by -1 that overflows.
		return (wrapped, y == W::MIN);
	}
	(wrapped, wrapped.div_truncate(x) != y)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_zero_never_overflows() {
		assert_eq!(reference_mul(0i64, i64::MIN), (0, false));
		assert_eq!(reference_mul(0u64, u64::MAX), (0, false));
	}

	#[test]
	fn test_minus_one_overflows_only_on_min() {
		assert_eq!(reference_mul(-1i64, i64::MIN), (i64::MIN, true));
		assert_eq!(reference_mul(-1i64, i64::MAX), (-i64::MAX, false));
		assert_eq!(reference_mul(-1i64, -1), (1, false));
	}

	proptest! {
		#[test]
		fn test_signed_oracle_matches_wide_arithmetic(x in any::<i64>(), y in any::<i64>()) {
			let (wrapped, overflowed) = reference_mul(x, y);
			let exact = x as i128 * y as i128;
			prop_assert_eq!(wrapped, exact as i64);
			prop_assert_eq!(overflowed, exact != (exact as i64) as i128);
		}

		#[test]
		fn test_unsigned_oracle_matches_wide_arithmetic(x in any::<u64>(), y in any::<u64>()) {
			let (wrapped, overflowed) = reference_mul(x, y);
			let exact = x as u128 * y as u128;
			prop_assert_eq!(wrapped, exact as u64);
			prop_assert_eq!(overflowed, exact != (exact as u64) as u128);
		}
	}
}
