//! Property-based tests for critical-point classification.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quintic_poly::Polynomial;
    use quintic_solve::round_to;

    use crate::critical::{extrema, inflection_points, saddle_points, CriticalKind};
    use crate::error::AnalysisError;

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::array::uniform6((-9i32..10i32).prop_map(f64::from)).prop_map(Polynomial::new)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn extrema_ascending_and_on_graph(p in small_poly()) {
            match extrema(&p) {
                Ok(points) => {
                    prop_assert!(!points.is_empty());
                    for pair in points.windows(2) {
                        prop_assert!(pair[0].x < pair[1].x);
                    }
                    for point in &points {
                        prop_assert_eq!(point.kind, CriticalKind::Extremum);
                        prop_assert_eq!(point.y, round_to(p.evaluate(point.x), 2) + 0.0);
                    }
                }
                Err(AnalysisError::DegreeTooLow { degree, .. }) => prop_assert!(degree < 2),
                Err(AnalysisError::NoCriticalPoints { derivative_order, .. }) => {
                    prop_assert_eq!(derivative_order, 1);
                }
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
        }

        #[test]
        fn saddles_are_inflections(p in small_poly()) {
            if let (Ok(inflections), Ok(saddles)) = (inflection_points(&p), saddle_points(&p)) {
                for saddle in &saddles {
                    prop_assert!(inflections.iter().any(|i| i.as_pair() == saddle.as_pair()));
                }
            }
        }

        #[test]
        fn degree_gate_matches_kind(p in small_poly()) {
            let too_low = matches!(inflection_points(&p), Err(AnalysisError::DegreeTooLow { .. }));
            prop_assert_eq!(too_low, p.degree() < 3);
        }
    }
}
