//! # gauss-complex
//!
//! Fixed-precision complex numbers for Gauss.
//!
//! This crate provides a single value type, [`Complex`]: a plain pair of
//! `f64` components with standard complex arithmetic, exact component-wise
//! equality, and an overflow-robust magnitude.
//!
//! ## Semantics
//!
//! - Every operation is total over the double domain; non-finite inputs
//!   propagate per IEEE-754 rather than being rejected.
//! - Division by zero is not an error: it yields the NaN/infinity components
//!   that raw float division produces.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;

#[cfg(test)]
mod proptests;

pub use complex::Complex;
