//! The per-type expression-traits contract.

use std::fmt::Display;

use rand::Rng;

use crate::ops::{BinaryOp, UnaryOp};

/// Everything a random-expression harness needs to know about one numeric
/// type: how to draw operands, which operations exist, and when an operation
/// is safe to evaluate without overflow.
///
/// The operation tables are static, ordered, and immutable; they may be read
/// concurrently without synchronization. The random generator is caller
/// supplied and follows normal sequential-access discipline.
pub trait ExpressionTraits: Copy + PartialEq + Display + Sized + 'static {
    /// Practical ceiling on the magnitude of a single scalar component.
    ///
    /// Kept with generous margin below the overflow threshold of the double
    /// domain, so that chained bound-checked operations several levels deep
    /// cannot silently round-trip through overflow.
    const MAX_MAGNITUDE: f64;

    /// Draws a random operand from a bounded, implementation-chosen
    /// distribution.
    ///
    /// The domain is deliberately small-magnitude so a harness can chain
    /// several operations deep before the validity predicates start
    /// rejecting combinations.
    fn random_number<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// The type's unary operations, in a fixed order.
    fn unary_ops() -> &'static [UnaryOp<Self>];

    /// The type's binary operations, in a fixed order.
    fn binary_ops() -> &'static [BinaryOp<Self>];

    /// Returns true iff `component` is finite and far enough below the
    /// overflow threshold that equality comparisons against a reference
    /// computation remain meaningful.
    ///
    /// This is the single seam the validity predicates are built from.
    #[must_use]
    fn check_bounds(component: f64) -> bool {
        component.is_finite() && component.abs() <= Self::MAX_MAGNITUDE
    }
}
