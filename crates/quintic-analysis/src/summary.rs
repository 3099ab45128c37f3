//! One memoized analysis pass over a polynomial.

use quintic_poly::{Polynomial, Symmetry};
use quintic_solve::{NewtonFinder, NewtonOptions};
use tracing::debug;

use crate::critical::{extrema_with, inflection_points_with, saddle_points_with, CriticalPoint};
use crate::error::AnalysisError;

/// Roots and critical points of one polynomial, computed once.
///
/// Each critical-point property keeps its own `Result`, so a polynomial
/// without inflection points still reports its extrema and the reason
/// for the missing property stays inspectable.
#[derive(Clone, Debug)]
pub struct PolynomialAnalysis {
    polynomial: Polynomial,
    roots: Vec<f64>,
    extrema: Result<Vec<CriticalPoint>, AnalysisError>,
    inflection_points: Result<Vec<CriticalPoint>, AnalysisError>,
    saddle_points: Result<Vec<CriticalPoint>, AnalysisError>,
}

impl PolynomialAnalysis {
    /// Analyzes `polynomial` with the default solver options.
    #[must_use]
    pub fn new(polynomial: Polynomial) -> Self {
        Self::with_options(polynomial, &NewtonOptions::default())
    }

    /// Analyzes `polynomial` with explicit solver options.
    #[must_use]
    pub fn with_options(polynomial: Polynomial, options: &NewtonOptions) -> Self {
        let roots = NewtonFinder::new(options.clone()).roots(&polynomial);
        let extrema = extrema_with(&polynomial, options);
        let inflection_points = inflection_points_with(&polynomial, options);
        let saddle_points = saddle_points_with(&polynomial, options);

        for err in [&extrema, &inflection_points, &saddle_points]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
        {
            debug!(error = %err, "property unavailable");
        }

        Self {
            polynomial,
            roots,
            extrema,
            inflection_points,
            saddle_points,
        }
    }

    /// Builds the polynomial from raw input and analyzes it.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Poly`] if `coeffs` does not hold exactly
    /// six entries.
    pub fn from_coefficients(coeffs: &[f64]) -> Result<Self, AnalysisError> {
        let polynomial = Polynomial::from_slice(coeffs)?;
        Ok(Self::new(polynomial))
    }

    /// The analyzed polynomial.
    #[must_use]
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Degree of the analyzed polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.polynomial.degree()
    }

    /// Symmetry of the analyzed polynomial.
    #[must_use]
    pub fn symmetry(&self) -> Symmetry {
        self.polynomial.symmetry()
    }

    /// Real roots in ascending order.
    #[must_use]
    pub fn roots(&self) -> &[f64] {
        &self.roots
    }

    /// Extrema, or why there are none.
    ///
    /// # Errors
    ///
    /// The error stored when the pass ran.
    pub fn extrema(&self) -> Result<&[CriticalPoint], &AnalysisError> {
        self.extrema.as_deref()
    }

    /// Inflection points, or why there are none.
    ///
    /// # Errors
    ///
    /// The error stored when the pass ran.
    pub fn inflection_points(&self) -> Result<&[CriticalPoint], &AnalysisError> {
        self.inflection_points.as_deref()
    }

    /// Strict saddle points, or why there are none.
    ///
    /// # Errors
    ///
    /// The error stored when the pass ran.
    pub fn saddle_points(&self) -> Result<&[CriticalPoint], &AnalysisError> {
        self.saddle_points.as_deref()
    }

    /// Every critical point that was found, in extrema, inflection,
    /// saddle order.
    pub fn critical_points(&self) -> impl Iterator<Item = &CriticalPoint> {
        [&self.extrema, &self.inflection_points, &self.saddle_points]
            .into_iter()
            .filter_map(|r| r.as_ref().ok())
            .flatten()
    }
}

impl From<Polynomial> for PolynomialAnalysis {
    fn from(polynomial: Polynomial) -> Self {
        Self::new(polynomial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critical::CriticalKind;
    use quintic_poly::PolyError;

    #[test]
    fn test_cubic_pass() {
        let analysis = PolynomialAnalysis::new(Polynomial::new([0.0, 0.0, 0.0, 1.0, 0.0, 0.0]));

        assert_eq!(analysis.degree(), 3);
        assert_eq!(analysis.symmetry(), Symmetry::Point);
        assert_eq!(analysis.roots(), &[0.0]);
        assert_eq!(analysis.extrema().unwrap().len(), 1);
        assert_eq!(analysis.inflection_points().unwrap().len(), 1);
        assert_eq!(analysis.saddle_points().unwrap()[0].as_pair(), (0.0, 0.0));
        assert_eq!(analysis.critical_points().count(), 3);
    }

    #[test]
    fn test_failures_are_kept_per_property() {
        // 2x² + 12: one extremum, no roots, too low for inflections
        let analysis = PolynomialAnalysis::new(Polynomial::new([12.0, 0.0, 2.0, 0.0, 0.0, 0.0]));

        assert!(analysis.roots().is_empty());
        assert_eq!(analysis.extrema().unwrap()[0].as_pair(), (0.0, 12.0));
        assert!(matches!(
            analysis.inflection_points(),
            Err(AnalysisError::DegreeTooLow { kind: CriticalKind::Inflection, .. })
        ));
        assert!(analysis.saddle_points().is_err());
        assert_eq!(analysis.critical_points().count(), 1);
    }

    #[test]
    fn test_from_coefficients() {
        let analysis = PolynomialAnalysis::from_coefficients(&[-1.0, 0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(analysis.roots(), &[-1.0, 1.0]);

        assert_eq!(
            PolynomialAnalysis::from_coefficients(&[1.0]).err(),
            Some(AnalysisError::Poly(PolyError::InvalidArity { len: 1 }))
        );
    }
}
