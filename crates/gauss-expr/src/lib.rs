//! # gauss-expr
//!
//! Expression traits for randomized differential testing.
//!
//! This crate describes, per numeric type, everything a random-expression
//! harness needs to test that type's arithmetic against an independent
//! reference model:
//!
//! - a bounded random-value generator,
//! - a fixed table of unary operations,
//! - a fixed table of binary operations, each carrying an overflow-safety
//!   predicate.
//!
//! The predicate is the load-bearing piece: whenever it accepts a pair of
//! operands, the type's operator and the reference model are guaranteed to
//! agree to full precision, so the harness can assert exact equality instead
//! of tolerating silent precision loss. Operand combinations it rejects are
//! skipped, not failed.
//!
//! The [`Complex`](gauss_complex::Complex) instantiation is provided here;
//! the contract itself is type-agnostic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diff;
pub mod ops;
pub mod traits;

mod complex;


pub use diff::{check_binary, check_unary, Verdict};
pub use ops::{BinaryOp, UnaryOp};
pub use traits::ExpressionTraits;
