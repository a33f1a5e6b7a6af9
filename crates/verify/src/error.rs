// Copyright 2025 Irreducible Inc.

/// Error thrown when a verification run is abandoned.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// The checked multiply is systematically broken; further enumeration of failures would
	/// only flood the report.
	#[error("mismatch limit reached after {count} disagreements")]
	MismatchLimit { count: usize },
}
