//! Operation descriptors.
//!
//! An operation descriptor bundles one arithmetic capability of a numeric
//! type as plain data: an independent reference model, the type's actual
//! operator, and (for binary operations) a validity predicate. Tables of
//! descriptors are process-wide constants built once and never mutated.

use std::fmt;

/// One unary operation of a numeric type.
///
/// Unary operations carry no validity predicate: an operation is only
/// admitted to a unary table if it cannot grow operand magnitude, so it is
/// safe on any operand the binary predicates already admitted.
#[derive(Clone, Copy)]
pub struct UnaryOp<T: 'static> {
    /// Diagnostic label, e.g. `"negate"`.
    pub name: &'static str,
    /// Independent reference model of the operation's semantics.
    pub reference: fn(T) -> T,
    /// The type's actual operator.
    pub apply: fn(T) -> T,
}

/// One binary operation of a numeric type.
///
/// For any operand pair accepted by `is_valid`, `reference` and `apply`
/// must produce exactly equal results; the predicate exists precisely to
/// exclude operands for which that guarantee cannot be made.
#[derive(Clone, Copy)]
pub struct BinaryOp<T: 'static> {
    /// Diagnostic label, e.g. `"multiply"`.
    pub name: &'static str,
    /// Independent reference model of the operation's semantics.
    pub reference: fn(T, T) -> T,
    /// The type's actual operator.
    pub apply: fn(T, T) -> T,
    /// Returns true iff evaluating on the given operands is guaranteed free
    /// of overflow, so exact agreement may be asserted.
    pub is_valid: fn(T, T) -> bool,
}

impl<T> fmt::Debug for UnaryOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnaryOp({})", self.name)
    }
}

impl<T> fmt::Debug for BinaryOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryOp({})", self.name)
    }
}
