//! Property-based tests for coefficient transforms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algebra::{self, Coefficients};
    use crate::antiderivative::{verify_antiderivative, IntegrationConstant};
    use crate::polynomial::Polynomial;

    // Strategy for small integer-valued coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    fn coeffs() -> impl Strategy<Value = Coefficients> {
        proptest::array::uniform6(small_coeff())
    }

    proptest! {
        #[test]
        fn degree_is_highest_nonzero(c in coeffs()) {
            let d = algebra::degree(&c);
            prop_assert!(d <= 5);
            prop_assert!(c[d + 1..].iter().all(|&x| x == 0.0));
            if d > 0 {
                prop_assert!(c[d] != 0.0);
            }
        }

        #[test]
        fn symmetry_is_exclusive(c in coeffs()) {
            prop_assert!(!(algebra::is_axis_symmetric(&c) && algebra::is_point_symmetric(&c)));
        }

        #[test]
        fn derivative_lowers_degree(c in coeffs()) {
            let p = Polynomial::new(c);
            let d = p.derivative();
            if p.degree() > 0 {
                prop_assert_eq!(d.degree(), p.degree() - 1);
            } else {
                prop_assert!(d.is_zero());
            }
        }

        #[test]
        fn derivative_of_antiderivative(c in coeffs()) {
            // d/dx ∫p = p regardless of the constant rule
            let p = Polynomial::new(c);
            for rule in [IntegrationConstant::Zero, IntegrationConstant::LeadingCoefficient] {
                let a = p.antiderivative_with(rule);
                prop_assert!(verify_antiderivative(&p, &a));
            }
        }

        #[test]
        fn eval_is_linear(a in coeffs(), b in coeffs(), x in -5i32..5i32) {
            let x = f64::from(x);
            let mut sum = [0.0; 6];
            for i in 0..6 {
                sum[i] = a[i] + b[i];
            }
            let lhs = algebra::evaluate(&sum, x);
            let rhs = algebra::evaluate(&a, x) + algebra::evaluate(&b, x);
            prop_assert!((lhs - rhs).abs() < 1e-6);
        }
    }
}
