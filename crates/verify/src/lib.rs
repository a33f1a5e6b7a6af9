// Copyright 2025 Irreducible Inc.

//! Verification harness for the float-probe multiply.
//!
//! The production multiply in `mulcheck_arith` is subtle; this crate holds everything needed to
//! distrust it. A deliberately naive division-based oracle recomputes each (product, overflow)
//! pair, and a sweep driver concentrates test pairs where the probe could plausibly go wrong:
//! within a few units of the representable extremes and of products that land next to them.

pub mod boundary;
pub mod error;
pub mod reference;
pub mod word;

pub use boundary::*;
pub use error::*;
pub use reference::*;
pub use word::*;
