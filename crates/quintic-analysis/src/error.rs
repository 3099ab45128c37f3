//! Analysis errors.

use quintic_poly::PolyError;
use thiserror::Error;

use crate::critical::CriticalKind;

/// Errors that can occur while classifying critical points.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AnalysisError {
    /// The property is undefined below a certain degree.
    #[error("cannot compute the {kind} of a degree {degree} polynomial: degree {required} or higher is required")]
    DegreeTooLow {
        /// The requested property.
        kind: CriticalKind,
        /// Minimum degree for the property.
        required: usize,
        /// Degree of the polynomial.
        degree: usize,
    },

    /// The degree was sufficient but the defining derivative has no real
    /// roots within the search.
    #[error("failed to compute the {kind}: derivative of order {derivative_order} has no real roots")]
    NoCriticalPoints {
        /// The requested property.
        kind: CriticalKind,
        /// Which derivative was searched.
        derivative_order: u32,
    },

    /// The polynomial itself could not be built.
    #[error(transparent)]
    Poly(#[from] PolyError),
}
