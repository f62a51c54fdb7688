//! Differential evaluation of a single operation descriptor.
//!
//! These helpers are the seam a random-expression harness drives: pick an
//! operation, pick operands, and ask whether the type's operator and the
//! reference model agree. Rejected operands are a skip, never a failure.

use crate::ops::{BinaryOp, UnaryOp};
use crate::traits::ExpressionTraits;

/// Outcome of differentially evaluating one operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    /// The validity predicate rejected the operands; nothing was evaluated.
    Skipped,
    /// Reference model and actual operator agreed exactly.
    Agreed,
    /// Reference model and actual operator disagreed.
    Disagreed,
}

/// Evaluates a unary descriptor both ways and compares exactly.
///
/// Unary operations have no predicate, so the result is never
/// [`Verdict::Skipped`].
pub fn check_unary<T: ExpressionTraits>(op: &UnaryOp<T>, operand: T) -> Verdict {
    if (op.reference)(operand) == (op.apply)(operand) {
        Verdict::Agreed
    } else {
        Verdict::Disagreed
    }
}

/// Evaluates a binary descriptor both ways and compares exactly, skipping
/// operand pairs the descriptor's predicate rejects.
pub fn check_binary<T: ExpressionTraits>(op: &BinaryOp<T>, lhs: T, rhs: T) -> Verdict {
    if !(op.is_valid)(lhs, rhs) {
        return Verdict::Skipped;
    }

    if (op.reference)(lhs, rhs) == (op.apply)(lhs, rhs) {
        Verdict::Agreed
    } else {
        Verdict::Disagreed
    }
}
