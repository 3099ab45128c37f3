//! The immutable polynomial value.

use std::cmp::Ordering;
use std::fmt;

use crate::algebra::{self, Coefficients, COEFFICIENT_COUNT};
use crate::antiderivative::{Antiderivative, IntegrationConstant};
use crate::error::PolyError;

/// Symmetry of a polynomial's graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Mirror symmetric about the y-axis (only even powers).
    Axis,
    /// Point symmetric about the origin (only odd powers).
    Point,
    /// Neither.
    None,
}

/// A real polynomial of degree at most five.
///
/// Coefficients are stored in ascending power order. The value never
/// changes after construction; [`derivative`](Self::derivative) and
/// [`antiderivative`](Self::antiderivative) build new values.
///
/// Each polynomial also remembers how many times it was differentiated
/// from the user's input. That counter exists for labelling (`f''`) and
/// is ignored by equality and by every computation.
#[derive(Clone, Copy)]
pub struct Polynomial {
    coeffs: Coefficients,
    derivation_order: u32,
}

impl Polynomial {
    /// Creates a polynomial from exactly six coefficients.
    #[must_use]
    pub fn new(coeffs: Coefficients) -> Self {
        Self {
            coeffs,
            derivation_order: 0,
        }
    }

    /// Creates a polynomial from a slice, which must hold six entries.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidArity`] for any other length.
    pub fn from_slice(coeffs: &[f64]) -> Result<Self, PolyError> {
        let coeffs: Coefficients = coeffs
            .try_into()
            .map_err(|_| PolyError::InvalidArity { len: coeffs.len() })?;
        Ok(Self::new(coeffs))
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new([0.0; COEFFICIENT_COUNT])
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }

    /// Returns the coefficient of x^i, or zero past the last slot.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns how many times this polynomial was differentiated.
    #[must_use]
    pub fn derivation_order(&self) -> u32 {
        self.derivation_order
    }

    /// Returns the degree. See [`algebra::degree`] for the constant case.
    #[must_use]
    pub fn degree(&self) -> usize {
        algebra::degree(&self.coeffs)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Returns true if only even powers are present (and degree > 0).
    #[must_use]
    pub fn is_axis_symmetric(&self) -> bool {
        algebra::is_axis_symmetric(&self.coeffs)
    }

    /// Returns true if only odd powers are present (and degree > 0).
    #[must_use]
    pub fn is_point_symmetric(&self) -> bool {
        algebra::is_point_symmetric(&self.coeffs)
    }

    /// Classifies the graph's symmetry.
    #[must_use]
    pub fn symmetry(&self) -> Symmetry {
        if self.is_axis_symmetric() {
            Symmetry::Axis
        } else if self.is_point_symmetric() {
            Symmetry::Point
        } else {
            Symmetry::None
        }
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        algebra::evaluate(&self.coeffs, x)
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self {
            coeffs: algebra::derivative_coefficients(&self.coeffs),
            derivation_order: self.derivation_order + 1,
        }
    }

    /// Differentiates `n` times.
    #[must_use]
    pub fn nth_derivative(&self, n: u32) -> Self {
        (0..n).fold(*self, |p, _| p.derivative())
    }

    /// Computes the antiderivative with a zero constant of integration.
    #[must_use]
    pub fn antiderivative(&self) -> Antiderivative {
        self.antiderivative_with(IntegrationConstant::Zero)
    }

    /// Computes the antiderivative with the given constant rule.
    #[must_use]
    pub fn antiderivative_with(&self, constant: IntegrationConstant) -> Antiderivative {
        Antiderivative::of(self, constant)
    }

    /// Samples `samples` evenly spaced points `(x, p(x))` over `[start, end]`.
    ///
    /// Both endpoints are included when `samples >= 2`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidRange`] unless `end > start`.
    pub fn sample(&self, start: f64, end: f64, samples: usize) -> Result<Vec<(f64, f64)>, PolyError> {
        if end.partial_cmp(&start) != Some(Ordering::Greater) {
            return Err(PolyError::InvalidRange { start, end });
        }

        let intervals = samples.saturating_sub(1).max(1) as f64;
        let step = (end - start) / intervals;

        Ok((0..samples)
            .map(|i| {
                let x = start + i as f64 * step;
                (x, self.evaluate(x))
            })
            .collect())
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("coeffs", &self.coeffs)
            .field("derivation_order", &self.derivation_order)
            .finish()
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Coefficients> for Polynomial {
    fn from(coeffs: Coefficients) -> Self {
        Self::new(coeffs)
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(coeffs)
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&coeffs)
    }
}
