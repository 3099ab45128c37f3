//! Property-based tests for root finding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quintic_poly::Polynomial;

    use crate::newton::real_roots;

    // Multiplies out (x - r₁)(x - r₂)... with leading coefficient 1
    fn from_roots(roots: &[i32]) -> Polynomial {
        let mut coeffs = [0.0; 6];
        coeffs[0] = 1.0;
        for &r in roots {
            let r = f64::from(r);
            let mut next = [0.0; 6];
            for i in 0..5 {
                next[i + 1] += coeffs[i];
                next[i] -= r * coeffs[i];
            }
            coeffs = next;
        }
        Polynomial::new(coeffs)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::array::uniform6((-20i32..20i32).prop_map(f64::from)).prop_map(Polynomial::new)
    }

    proptest! {
        // Non-converging seeds run to the iteration cap, keep the case count modest
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn roots_strictly_ascending_and_distinct(p in small_poly()) {
            let roots = real_roots(&p);
            for pair in roots.windows(2) {
                prop_assert!(pair[1] - pair[0] > 1e-4);
            }
            prop_assert!(roots.iter().all(|r| r.is_finite()));
        }

        #[test]
        fn integer_roots_recovered(
            expected in proptest::collection::btree_set(-5i32..=5i32, 1..=4)
        ) {
            let expected: Vec<i32> = expected.into_iter().collect();
            let p = from_roots(&expected);
            let roots = real_roots(&p);

            let expected: Vec<f64> = expected.into_iter().map(f64::from).collect();
            prop_assert_eq!(&roots, &expected);

            for &r in &roots {
                prop_assert!(p.evaluate(r).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn from_roots_expands() {
        // (x - 1)(x + 2) = x² + x - 2
        let p = from_roots(&[1, -2]);
        assert_eq!(p.coefficients(), &[-2.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }
}
