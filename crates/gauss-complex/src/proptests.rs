//! Property-based tests for complex arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Complex;

    // Integer-valued components keep every sum and product below 2^53, so
    // the field axioms that hold for exact arithmetic hold bit-for-bit here.
    fn small_component() -> impl Strategy<Value = f64> {
        (-100i32..=100).prop_map(f64::from)
    }

    fn small_complex() -> impl Strategy<Value = Complex> {
        (small_component(), small_component()).prop_map(|(re, im)| Complex::new(re, im))
    }

    fn nonzero_complex() -> impl Strategy<Value = Complex> {
        small_complex().prop_filter("operand must be non-zero", |z| !z.is_zero())
    }

    proptest! {
        #[test]
        fn construct_round_trips(re in small_component(), im in small_component()) {
            let z = Complex::new(re, im);
            prop_assert_eq!(z.real(), re);
            prop_assert_eq!(z.imag(), im);
        }

        #[test]
        fn add_commutative(x in small_complex(), y in small_complex()) {
            prop_assert_eq!(x + y, y + x);
        }

        #[test]
        fn add_associative(x in small_complex(), y in small_complex(), z in small_complex()) {
            prop_assert_eq!((x + y) + z, x + (y + z));
        }

        #[test]
        fn add_identity(x in small_complex()) {
            prop_assert_eq!(x + Complex::zero(), x);
            prop_assert_eq!(Complex::zero() + x, x);
        }

        #[test]
        fn mul_commutative(x in small_complex(), y in small_complex()) {
            prop_assert_eq!(x * y, y * x);
        }

        #[test]
        fn mul_associative(x in small_complex(), y in small_complex(), z in small_complex()) {
            prop_assert_eq!((x * y) * z, x * (y * z));
        }

        #[test]
        fn mul_identity(x in small_complex()) {
            prop_assert_eq!(x * Complex::one(), x);
            prop_assert_eq!(Complex::one() * x, x);
        }

        #[test]
        fn mul_absorbs_zero(x in small_complex()) {
            prop_assert_eq!(x * Complex::zero(), Complex::zero());
            prop_assert_eq!(Complex::zero() * x, Complex::zero());
        }

        #[test]
        fn distributive(x in small_complex(), y in small_complex(), z in small_complex()) {
            prop_assert_eq!(x * (y + z), x * y + x * z);
        }

        #[test]
        fn negate_involution(x in small_complex()) {
            prop_assert_eq!(-(-x), x);
            prop_assert_eq!(x + (-x), Complex::zero());
        }

        #[test]
        fn conjugate_involution(x in small_complex()) {
            prop_assert_eq!(!!x, x);
        }

        #[test]
        fn conjugate_preserves_abs(x in small_complex()) {
            prop_assert_eq!((!x).abs(), x.abs());
        }

        #[test]
        fn abs_nonnegative(x in small_complex()) {
            prop_assert!(x.abs() >= 0.0);
        }

        #[test]
        fn abs_matches_norm_sqr(x in small_complex()) {
            // Small integer components: no overflow, so the naive square
            // agrees with the scaled norm up to rounding.
            let diff = x.abs() - x.norm_sqr().sqrt();
            prop_assert!(diff.abs() <= x.abs() * 1e-14);
        }

        #[test]
        fn mul_then_divide_round_trips(x in small_complex(), y in nonzero_complex()) {
            let back = (x * y) / y;
            prop_assert!((back.real() - x.real()).abs() <= x.abs() * 1e-12);
            prop_assert!((back.imag() - x.imag()).abs() <= x.abs() * 1e-12);
        }

        #[test]
        fn display_renders_integer_components(re in -100i32..=100, im in -100i32..=100) {
            let z = Complex::new(f64::from(re), f64::from(im));
            prop_assert_eq!(z.to_string(), format!("({re},{im})"));
        }
    }
}
