// Copyright 2025 Irreducible Inc.

use std::fmt;

use itertools::iproduct;
use mulcheck_arith::CheckedWideMul;
use rand::Rng;
use tracing::{debug, error};

use crate::{error::Error, reference::reference_mul, word::MulWord};

/// Radius of the neighborhood swept around each pivot pair.
const SWEEP_RADIUS: i64 = 8;

/// Number of random-product trials between two progress callbacks.
const PROGRESS_INTERVAL: u64 = 1000;

/// Disagreements tolerated before a run is abandoned as systematically broken.
pub const DEFAULT_MISMATCH_LIMIT: usize = 10;

/// A single disagreement between the checked multiply and the reference oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch<W> {
	pub x: W,
	pub y: W,
	/// (result, overflow) from the multiply under test.
	pub actual: (W, bool),
	/// (result, overflow) from the oracle.
	pub expected: (W, bool),
}

impl<W: fmt::Display> fmt::Display for Mismatch<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} * {}: checked=({}, overflow={}) reference=({}, overflow={})",
			self.x, self.y, self.actual.0, self.actual.1, self.expected.0, self.expected.1
		)
	}
}

/// Capped accumulator of disagreements.
///
/// An explicit value owned by the driver rather than a process-wide counter, so independent
/// runs never observe each other.
#[derive(Debug)]
pub struct MismatchLog<W> {
	mismatches: Vec<Mismatch<W>>,
	limit: usize,
}

impl<W: MulWord> MismatchLog<W> {
	pub fn new(limit: usize) -> Self {
		Self {
			mismatches: Vec::new(),
			limit,
		}
	}

	/// Records a disagreement, failing once the cap is reached.
	pub fn record(&mut self, mismatch: Mismatch<W>) -> Result<(), Error> {
		error!(%mismatch, "checked multiply disagrees with reference");
		self.mismatches.push(mismatch);
		if self.mismatches.len() >= self.limit {
			Err(Error::MismatchLimit {
				count: self.mismatches.len(),
			})
		} else {
			Ok(())
		}
	}

	pub fn mismatches(&self) -> &[Mismatch<W>] {
		&self.mismatches
	}

	pub fn len(&self) -> usize {
		self.mismatches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mismatches.is_empty()
	}
}

/// Sweeps operand pairs whose products crowd the representable extremes, comparing the
/// float-probe multiply against [`reference_mul`] on every pair.
///
/// The probe's threshold logic can only plausibly fail where overflow flips, so pairs are
/// generated in ±[`SWEEP_RADIUS`] neighborhoods around pivots sitting on that boundary.
#[derive(Debug)]
pub struct BoundaryChecker<W, R> {
	rng: R,
	log: MismatchLog<W>,
}

impl<W: MulWord, R: Rng> BoundaryChecker<W, R> {
	pub fn new(rng: R) -> Self {
		Self::with_mismatch_limit(rng, DEFAULT_MISMATCH_LIMIT)
	}

	pub fn with_mismatch_limit(rng: R, limit: usize) -> Self {
		Self {
			rng,
			log: MismatchLog::new(limit),
		}
	}

	/// Compares both implementations on a single operand pair.
	pub fn check(&mut self, x: W, y: W) -> Result<(), Error> {
		let actual = x.mul_with_overflow(y);
		let expected = reference_mul(x, y);
		if actual != expected {
			self.log.record(Mismatch {
				x,
				y,
				actual,
				expected,
			})?;
		}
		Ok(())
	}

	/// Sweeps the wraparound neighborhood around `(x, y)`.
	pub fn check_near(&mut self, x: W, y: W) -> Result<(), Error> {
		for (i, j) in iproduct!(-SWEEP_RADIUS..=SWEEP_RADIUS, -SWEEP_RADIUS..=SWEEP_RADIUS) {
			self.check(x.offset(i), y.offset(j))?;
		}
		Ok(())
	}

	/// Neighborhoods around every pivot pair drawn from {0, MAX} x {0, MAX}.
	pub fn sweep_extremes(&mut self) -> Result<(), Error> {
		debug!("sweeping pivots at the representable extremes");
		for (x, y) in iproduct!([W::ZERO, W::MAX], [W::ZERO, W::MAX]) {
			self.check_near(x, y)?;
		}
		Ok(())
	}

	/// Random-pivot sweep: walks a random word down its full dynamic range by halving, pairing
	/// each step with the cofactor that lands the product next to a representable bound.
	///
	/// `progress` is called with the trial count every [`PROGRESS_INTERVAL`] trials.
	pub fn sweep_random_products(
		&mut self,
		trials: u64,
		mut progress: impl FnMut(u64),
	) -> Result<(), Error> {
		debug!(trials, "sweeping products near the representable bounds");
		for trial in 0..trials {
			let mut x = W::random(&mut self.rng);
			while x != W::ZERO {
				self.check_near(x, W::MAX.div_truncate(x))?;
				// For signed words also aim at the lower bound; x == -1 is excluded
				// because MIN / -1 is not representable.
				if W::NEG_ONE.is_some() && W::NEG_ONE != Some(x) {
					self.check_near(x, W::MIN.div_truncate(x))?;
				}
				x = x.halve();
			}
			if (trial + 1) % PROGRESS_INTERVAL == 0 {
				progress(trial + 1);
			}
		}
		Ok(())
	}

	/// Full verification run: extreme pivots, then `trials` random-product sweeps.
	pub fn run(&mut self, trials: u64, progress: impl FnMut(u64)) -> Result<(), Error> {
		self.sweep_extremes()?;
		self.sweep_random_products(trials, progress)
	}

	pub fn log(&self) -> &MismatchLog<W> {
		&self.log
	}

	pub fn into_log(self) -> MismatchLog<W> {
		self.log
	}
}
