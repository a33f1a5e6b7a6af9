// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, Criterion};
use mulcheck_arith::CheckedWideMul;
use rand::{thread_rng, Rng};

fn probe_mul_i64(c: &mut Criterion) {
	let mut rng = thread_rng();
	let a: i64 = rng.gen();
	let b: i64 = rng.gen();
	c.bench_function("i64::mul_with_overflow", |bench| {
		bench.iter(|| a.mul_with_overflow(b))
	});
}

fn probe_mul_u64(c: &mut Criterion) {
	let mut rng = thread_rng();
	let a: u64 = rng.gen();
	let b: u64 = rng.gen();
	c.bench_function("u64::mul_with_overflow", |bench| {
		bench.iter(|| a.mul_with_overflow(b))
	});
}

fn std_overflowing_mul_i64(c: &mut Criterion) {
	let mut rng = thread_rng();
	let a: i64 = rng.gen();
	let b: i64 = rng.gen();
	c.bench_function("i64::overflowing_mul", |bench| {
		bench.iter(|| a.overflowing_mul(b))
	});
}

fn std_overflowing_mul_u64(c: &mut Criterion) {
	let mut rng = thread_rng();
	let a: u64 = rng.gen();
	let b: u64 = rng.gen();
	c.bench_function("u64::overflowing_mul", |bench| {
		bench.iter(|| a.overflowing_mul(b))
	});
}

criterion_group!(
	multiply,
	probe_mul_i64,
	probe_mul_u64,
	std_overflowing_mul_i64,
	std_overflowing_mul_u64,
);
criterion_main!(multiply);
