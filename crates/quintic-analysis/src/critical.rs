//! Extrema, inflection points and saddle points.
//!
//! Each kind is found the same way: search a derivative of p for real
//! roots, then pair every root `r` with `p(r)` on the original
//! polynomial. Only the output y values are rounded; roots are used
//! exactly as the solver returned them.

use std::fmt;

use quintic_poly::Polynomial;
use quintic_solve::{round_to, NewtonFinder, NewtonOptions};
use tracing::debug;

use crate::error::AnalysisError;

/// The kind of a critical point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CriticalKind {
    /// A root of p′.
    Extremum,
    /// A root of p″.
    Inflection,
    /// A root of p″ at which p′ is also zero.
    Saddle,
}

impl CriticalKind {
    /// Lowest degree for which this kind is defined.
    #[must_use]
    pub fn required_degree(self) -> usize {
        match self {
            CriticalKind::Extremum => 2,
            CriticalKind::Inflection | CriticalKind::Saddle => 3,
        }
    }

    /// Which derivative's roots locate this kind.
    #[must_use]
    pub fn derivative_order(self) -> u32 {
        match self {
            CriticalKind::Extremum => 1,
            CriticalKind::Inflection | CriticalKind::Saddle => 2,
        }
    }
}

impl fmt::Display for CriticalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticalKind::Extremum => write!(f, "extrema"),
            CriticalKind::Inflection => write!(f, "inflection points"),
            CriticalKind::Saddle => write!(f, "saddle points"),
        }
    }
}

/// A point `(x, p(x))` on the graph where some derivative vanishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalPoint {
    /// Root of the defining derivative.
    pub x: f64,
    /// Value of the original polynomial at `x`, rounded.
    pub y: f64,
    /// Which derivative produced `x`.
    pub kind: CriticalKind,
}

impl CriticalPoint {
    fn on(p: &Polynomial, x: f64, kind: CriticalKind, options: &NewtonOptions) -> Self {
        Self {
            x,
            y: round_to(p.evaluate(x), options.decimals) + 0.0,
            kind,
        }
    }

    /// Returns `(x, y)`.
    #[must_use]
    pub fn as_pair(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Checks the degree and returns the roots of the kind's derivative.
fn derivative_roots(
    p: &Polynomial,
    kind: CriticalKind,
    options: &NewtonOptions,
) -> Result<Vec<f64>, AnalysisError> {
    let degree = p.degree();
    let required = kind.required_degree();
    if degree < required {
        debug!(%kind, degree, required, "degree too low");
        return Err(AnalysisError::DegreeTooLow {
            kind,
            required,
            degree,
        });
    }

    let derivative_order = kind.derivative_order();
    let roots = NewtonFinder::new(options.clone()).roots(&p.nth_derivative(derivative_order));
    if roots.is_empty() {
        debug!(%kind, derivative_order, "derivative has no real roots");
        return Err(AnalysisError::NoCriticalPoints {
            kind,
            derivative_order,
        });
    }

    Ok(roots)
}

/// Computes the extrema of `p` (degree ≥ 2).
///
/// # Errors
///
/// [`AnalysisError::DegreeTooLow`] below degree 2,
/// [`AnalysisError::NoCriticalPoints`] if p′ has no real roots.
pub fn extrema(p: &Polynomial) -> Result<Vec<CriticalPoint>, AnalysisError> {
    extrema_with(p, &NewtonOptions::default())
}

/// Computes the extrema of `p` with explicit solver options.
///
/// # Errors
///
/// See [`extrema`].
pub fn extrema_with(
    p: &Polynomial,
    options: &NewtonOptions,
) -> Result<Vec<CriticalPoint>, AnalysisError> {
    let kind = CriticalKind::Extremum;
    let roots = derivative_roots(p, kind, options)?;
    Ok(roots
        .into_iter()
        .map(|x| CriticalPoint::on(p, x, kind, options))
        .collect())
}

/// Computes the inflection points of `p` (degree ≥ 3).
///
/// # Errors
///
/// [`AnalysisError::DegreeTooLow`] below degree 3,
/// [`AnalysisError::NoCriticalPoints`] if p″ has no real roots.
pub fn inflection_points(p: &Polynomial) -> Result<Vec<CriticalPoint>, AnalysisError> {
    inflection_points_with(p, &NewtonOptions::default())
}

/// Computes the inflection points of `p` with explicit solver options.
///
/// # Errors
///
/// See [`inflection_points`].
pub fn inflection_points_with(
    p: &Polynomial,
    options: &NewtonOptions,
) -> Result<Vec<CriticalPoint>, AnalysisError> {
    let kind = CriticalKind::Inflection;
    let roots = derivative_roots(p, kind, options)?;
    Ok(roots
        .into_iter()
        .map(|x| CriticalPoint::on(p, x, kind, options))
        .collect())
}

/// Computes the saddle points of `p` (degree ≥ 3).
///
/// A root `r` of p″ is a saddle only if p′(r) is exactly `0.0`. Saddles
/// whose p′ leaves a floating-point residue are not reported; use
/// [`saddle_points_within`] to accept a tolerance instead.
///
/// # Errors
///
/// [`AnalysisError::DegreeTooLow`] below degree 3,
/// [`AnalysisError::NoCriticalPoints`] if p″ has no real roots.
pub fn saddle_points(p: &Polynomial) -> Result<Vec<CriticalPoint>, AnalysisError> {
    saddle_points_with(p, &NewtonOptions::default())
}

/// Computes the strict saddle points of `p` with explicit solver options.
///
/// # Errors
///
/// See [`saddle_points`].
#[allow(clippy::float_cmp)]
pub fn saddle_points_with(
    p: &Polynomial,
    options: &NewtonOptions,
) -> Result<Vec<CriticalPoint>, AnalysisError> {
    saddles_where(p, options, |slope| slope == 0.0)
}

/// Computes saddle points accepting `|p′(r)| <= tolerance`.
///
/// # Errors
///
/// See [`saddle_points`].
pub fn saddle_points_within(
    p: &Polynomial,
    options: &NewtonOptions,
    tolerance: f64,
) -> Result<Vec<CriticalPoint>, AnalysisError> {
    saddles_where(p, options, |slope| slope.abs() <= tolerance)
}

fn saddles_where<F>(
    p: &Polynomial,
    options: &NewtonOptions,
    is_flat: F,
) -> Result<Vec<CriticalPoint>, AnalysisError>
where
    F: Fn(f64) -> bool,
{
    let kind = CriticalKind::Saddle;
    let roots = derivative_roots(p, kind, options)?;
    let slope = p.derivative();

    Ok(roots
        .into_iter()
        .filter(|&x| is_flat(slope.evaluate(x)))
        .map(|x| CriticalPoint::on(p, x, kind, options))
        .collect())
}
