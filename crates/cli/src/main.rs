// Copyright 2025 Irreducible Inc.

//! Command-line driver that cross-checks the float-probe multiply against the division-based
//! reference, concentrating on products near the representable bounds. Prints a progress dot
//! per thousand trials and one diagnostic line per disagreement; exits nonzero iff any
//! disagreement was found.

use std::{
	io::{self, Write},
	process::ExitCode,
};

use clap::Parser;
use mulcheck_verify::{BoundaryChecker, Error, MulWord};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Verify overflow-checked 64-bit multiplication against a reference oracle")]
struct Args {
	/// Number of random-product trials per signedness.
	#[arg(long, default_value_t = 100_000)]
	trials: u64,
	/// Fix the RNG seed for a reproducible sweep.
	#[arg(long)]
	seed: Option<u64>,
	/// Only exercise the signed multiply.
	#[arg(long, conflicts_with = "unsigned_only")]
	signed_only: bool,
	/// Only exercise the unsigned multiply.
	#[arg(long)]
	unsigned_only: bool,
}

fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	}
}

fn verify<W: MulWord>(name: &str, rng: StdRng, trials: u64) -> usize {
	println!("verifying {name} multiply ({trials} trials)");
	let mut checker = BoundaryChecker::<W, _>::new(rng);
	let outcome = checker.run(trials, |_| {
		print!(".");
		let _ = io::stdout().flush();
	});
	println!();
	for mismatch in checker.log().mismatches() {
		println!("{mismatch}");
	}
	if let Err(Error::MismatchLimit { count }) = outcome {
		println!("too many disagreements to continue ({count})");
	}
	checker.log().len()
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let args = Args::parse();

	let mut mismatches = 0;
	if !args.unsigned_only {
		mismatches += verify::<i64>("signed", make_rng(args.seed), args.trials);
	}
	if !args.signed_only {
		mismatches += verify::<u64>("unsigned", make_rng(args.seed), args.trials);
	}

	if mismatches == 0 {
		println!("no disagreements found");
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}
