//! # Gauss
//!
//! Fixed-precision complex arithmetic with a trait-driven registry for
//! randomized differential testing.
//!
//! Two components, the second depending on the first:
//!
//! - [`complex`]: the [`Complex`](gauss_complex::Complex) value type — a
//!   plain pair of `f64` components with exact equality, standard complex
//!   arithmetic, and an overflow-robust magnitude.
//! - [`expr`]: the expression-traits registry — per numeric type, a bounded
//!   random-value generator plus static tables of unary and binary operation
//!   descriptors, each binary descriptor carrying an overflow-safety
//!   predicate so a harness can assert exact agreement between the type's
//!   operators and an independent reference model.
//!
//! ## Quick Start
//!
//! ```rust
//! use gauss::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
//! let x = Complex::random_number(&mut rng);
//! let y = Complex::random_number(&mut rng);
//!
//! for op in Complex::binary_ops() {
//!     assert_ne!(check_binary(op, x, y), Verdict::Disagreed);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gauss_complex as complex;
pub use gauss_expr as expr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gauss_complex::Complex;
    pub use gauss_expr::{check_binary, check_unary, BinaryOp, ExpressionTraits, UnaryOp, Verdict};
}
