//! The `Complex` instantiation of the expression-traits contract.

use gauss_complex::Complex;
use rand::Rng;

use crate::ops::{BinaryOp, UnaryOp};
use crate::traits::ExpressionTraits;

// Reference models: explicit component arithmetic, written out independently
// of the operators under test.

fn ref_negate(x: Complex) -> Complex {
    Complex::new(-x.real(), -x.imag())
}

fn ref_conjugate(x: Complex) -> Complex {
    Complex::new(x.real(), -x.imag())
}

fn ref_add(lhs: Complex, rhs: Complex) -> Complex {
    Complex::new(lhs.real() + rhs.real(), lhs.imag() + rhs.imag())
}

fn ref_subtract(lhs: Complex, rhs: Complex) -> Complex {
    Complex::new(lhs.real() - rhs.real(), lhs.imag() - rhs.imag())
}

fn ref_multiply(lhs: Complex, rhs: Complex) -> Complex {
    let (a, b) = (lhs.real(), lhs.imag());
    let (c, d) = (rhs.real(), rhs.imag());
    Complex::new(a * c - b * d, a * d + b * c)
}

fn ref_divide(lhs: Complex, rhs: Complex) -> Complex {
    let (a, b) = (lhs.real(), lhs.imag());
    let (c, d) = (rhs.real(), rhs.imag());
    let denom = c * c + d * d;
    Complex::new((a * c + b * d) / denom, (b * c - a * d) / denom)
}

// Actual operators, named so the static tables can hold them as fn pointers.

fn apply_negate(x: Complex) -> Complex {
    -x
}

fn apply_conjugate(x: Complex) -> Complex {
    !x
}

fn apply_add(lhs: Complex, rhs: Complex) -> Complex {
    lhs + rhs
}

fn apply_subtract(lhs: Complex, rhs: Complex) -> Complex {
    lhs - rhs
}

fn apply_multiply(lhs: Complex, rhs: Complex) -> Complex {
    lhs * rhs
}

fn apply_divide(lhs: Complex, rhs: Complex) -> Complex {
    lhs / rhs
}

// Validity predicates. Each checks exactly the intermediate values its own
// operation computes, nothing more.

fn valid_add(lhs: Complex, rhs: Complex) -> bool {
    Complex::check_bounds(lhs.real() + rhs.real())
        && Complex::check_bounds(lhs.imag() + rhs.imag())
}

fn valid_subtract(lhs: Complex, rhs: Complex) -> bool {
    Complex::check_bounds(lhs.real() - rhs.real())
        && Complex::check_bounds(lhs.imag() - rhs.imag())
}

// A product is trustworthy only if all four cross products stay in bounds:
// an overflowing cross term invalidates the comparison even when the final
// sum happens to look finite.
fn check_multiplicative(lhs: Complex, rhs: Complex) -> bool {
    let rr = lhs.real() * rhs.real();
    let ri = lhs.real() * rhs.imag();
    let ir = lhs.imag() * rhs.real();
    let ii = lhs.imag() * rhs.imag();

    Complex::check_bounds(rr)
        && Complex::check_bounds(ri)
        && Complex::check_bounds(ir)
        && Complex::check_bounds(ii)
        && Complex::check_bounds(rr - ii)
        && Complex::check_bounds(ri + ir)
}

// Zero divisors are excluded from the randomized domain; their IEEE-754
// behavior is covered by dedicated scenario tests on the value type.
fn valid_divide(lhs: Complex, rhs: Complex) -> bool {
    let denom = rhs.norm_sqr();
    check_multiplicative(lhs, rhs) && Complex::check_bounds(denom) && denom > 0.0
}

static UNARY_OPS: [UnaryOp<Complex>; 2] = [
    UnaryOp {
        name: "negate",
        reference: ref_negate,
        apply: apply_negate,
    },
    UnaryOp {
        name: "conjugate",
        reference: ref_conjugate,
        apply: apply_conjugate,
    },
];

static BINARY_OPS: [BinaryOp<Complex>; 4] = [
    BinaryOp {
        name: "add",
        reference: ref_add,
        apply: apply_add,
        is_valid: valid_add,
    },
    BinaryOp {
        name: "subtract",
        reference: ref_subtract,
        apply: apply_subtract,
        is_valid: valid_subtract,
    },
    BinaryOp {
        name: "multiply",
        reference: ref_multiply,
        apply: apply_multiply,
        is_valid: check_multiplicative,
    },
    BinaryOp {
        name: "divide",
        reference: ref_divide,
        apply: apply_divide,
        is_valid: valid_divide,
    },
];

impl ExpressionTraits for Complex {
    // Slightly below sqrt(f64::MAX) ~ 1.34e154: the product of two
    // bound-checked components always stays finite, with margin to spare
    // for the combination sums.
    const MAX_MAGNITUDE: f64 = 1e150;

    fn random_number<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let re = rng.gen_range(-100i32..=100);
        let im = rng.gen_range(-100i32..=100);
        Complex::new(f64::from(re), f64::from(im))
    }

    fn unary_ops() -> &'static [UnaryOp<Self>] {
        &UNARY_OPS
    }

    fn binary_ops() -> &'static [BinaryOp<Self>] {
        &BINARY_OPS
    }
}
