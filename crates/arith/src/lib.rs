// Copyright 2025 Irreducible Inc.

//! Division-free overflow-checked multiplication of 64-bit integers.
//!
//! The multiply in this crate returns the product modulo $2^{64}$ together with an exact
//! overflow flag, for every pair of operands, without ever dividing. Overflow is detected by
//! comparing the wrapped product against a single-precision floating-point approximation of the
//! true product: wraparound displaces the wrapped product by a multiple of $2^{64}$, which dwarfs
//! the worst-case rounding error of the approximation, so one threshold comparison separates the
//! two cases. See [`multiply`] for the derivation.

pub mod multiply;

pub use multiply::*;
