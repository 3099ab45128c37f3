//! Coefficient-vector transforms.
//!
//! These are the pure functions the rest of the workspace is built on.
//! They operate on a bare [`Coefficients`] array so that callers holding
//! raw input (before it becomes a [`Polynomial`](crate::Polynomial)) can
//! use them too.

use crate::antiderivative::IntegrationConstant;

/// Number of coefficient slots. Degree is therefore at most five.
pub const COEFFICIENT_COUNT: usize = 6;

/// Coefficients in ascending power order: `coeffs[i]` multiplies `x^i`.
pub type Coefficients = [f64; COEFFICIENT_COUNT];

/// Returns the highest index holding a nonzero coefficient.
///
/// The zero polynomial and a nonzero constant both report degree 0; the
/// two cannot be told apart by this function.
#[must_use]
pub fn degree(coeffs: &Coefficients) -> usize {
    coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
}

/// Returns true if every nonzero coefficient sits at an even power.
///
/// Constants are excluded: a degree-0 polynomial is never symmetric.
#[must_use]
pub fn is_axis_symmetric(coeffs: &Coefficients) -> bool {
    degree(coeffs) != 0
        && coeffs
            .iter()
            .enumerate()
            .all(|(i, &c)| c == 0.0 || i % 2 == 0)
}

/// Returns true if every nonzero coefficient sits at an odd power.
///
/// Constants are excluded: a degree-0 polynomial is never symmetric.
#[must_use]
pub fn is_point_symmetric(coeffs: &Coefficients) -> bool {
    degree(coeffs) != 0
        && coeffs
            .iter()
            .enumerate()
            .all(|(i, &c)| c == 0.0 || i % 2 == 1)
}

/// Evaluates `Σ coeffs[i] · x^i` by naive summation.
#[must_use]
pub fn evaluate(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .zip(0i32..)
        .fold(0.0, |acc, (&c, power)| acc + c * x.powi(power))
}

/// Computes the coefficients of the formal derivative.
///
/// `out[i] = (i + 1) * coeffs[i + 1]`; the top slot is always zero.
#[must_use]
pub fn derivative_coefficients(coeffs: &Coefficients) -> Coefficients {
    let mut out = [0.0; COEFFICIENT_COUNT];
    for (i, slot) in out.iter_mut().take(COEFFICIENT_COUNT - 1).enumerate() {
        *slot = (i + 1) as f64 * coeffs[i + 1];
    }
    out
}

/// Computes antiderivative coefficients by the power rule.
///
/// The result has one more slot than the input because the antiderivative
/// of a quintic is a sextic: `out[i + 1] = coeffs[i] / (i + 1)`, and
/// `out[0]` is the constant of integration chosen by `constant`.
#[must_use]
pub fn antiderivative_coefficients(
    coeffs: &Coefficients,
    constant: IntegrationConstant,
) -> [f64; COEFFICIENT_COUNT + 1] {
    let mut out = [0.0; COEFFICIENT_COUNT + 1];
    out[0] = constant.value_for(coeffs);
    for (i, &c) in coeffs.iter().enumerate() {
        out[i + 1] = c / (i + 1) as f64;
    }
    out
}
