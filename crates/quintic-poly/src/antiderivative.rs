//! Polynomial antiderivatives using the power rule.
//!
//! For p(x) = a₀ + a₁x + ... + a₅x⁵ the antiderivative is
//!
//! ∫p(x)dx = C + a₀x + (a₁/2)x² + ... + (a₅/6)x⁶
//!
//! which needs seven slots, so it is kept as its own type rather than
//! squeezed into a [`Polynomial`].

use crate::algebra::{self, Coefficients, COEFFICIENT_COUNT};
use crate::polynomial::Polynomial;

/// Where the constant of integration comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegrationConstant {
    /// C = 0.
    #[default]
    Zero,
    /// C is copied from the highest coefficient slot of the source.
    ///
    /// Kept for parity with earlier releases of the calculator. It has no
    /// effect on definite integrals, where the constant cancels.
    LeadingCoefficient,
}

impl IntegrationConstant {
    /// Returns the constant this rule produces for `coeffs`.
    #[must_use]
    pub fn value_for(self, coeffs: &Coefficients) -> f64 {
        match self {
            IntegrationConstant::Zero => 0.0,
            IntegrationConstant::LeadingCoefficient => coeffs[COEFFICIENT_COUNT - 1],
        }
    }
}

/// An antiderivative of a [`Polynomial`], degree at most six.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Antiderivative {
    coeffs: [f64; COEFFICIENT_COUNT + 1],
}

impl Antiderivative {
    /// Integrates `p` with the given constant of integration.
    #[must_use]
    pub fn of(p: &Polynomial, constant: IntegrationConstant) -> Self {
        Self {
            coeffs: algebra::antiderivative_coefficients(p.coefficients(), constant),
        }
    }

    /// Returns all seven coefficients, lowest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64; COEFFICIENT_COUNT + 1] {
        &self.coeffs
    }

    /// Returns the constant of integration.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.coeffs[0]
    }

    /// Evaluates the antiderivative at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        algebra::evaluate(&self.coeffs, x)
    }

    /// Differentiates back down to a six-slot polynomial.
    #[must_use]
    pub fn derivative(&self) -> Polynomial {
        let mut out = [0.0; COEFFICIENT_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (i + 1) as f64 * self.coeffs[i + 1];
        }
        Polynomial::new(out)
    }
}

/// Verifies an antiderivative by differentiating it.
///
/// Returns true if d/dx(antiderivative) reproduces `original` up to
/// floating-point rounding in the power-rule division.
#[must_use]
pub fn verify_antiderivative(original: &Polynomial, antiderivative: &Antiderivative) -> bool {
    let derivative = antiderivative.derivative();

    original
        .coefficients()
        .iter()
        .zip(derivative.coefficients())
        .all(|(&a, &b)| (a - b).abs() <= 4.0 * f64::EPSILON * a.abs().max(b.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: [f64; 6]) -> Polynomial {
        Polynomial::new(coeffs)
    }

    #[test]
    fn test_integrate_constant() {
        // ∫ 5 dx = 5x
        let a = Antiderivative::of(&poly([5.0, 0.0, 0.0, 0.0, 0.0, 0.0]), IntegrationConstant::Zero);
        assert_eq!(a.constant(), 0.0);
        assert_eq!(a.coefficients()[1], 5.0);
        assert_eq!(a.evaluate(2.0), 10.0);
    }

    #[test]
    fn test_integrate_linear() {
        // ∫ (2 + 3x) dx = 2x + (3/2)x²
        let a = Antiderivative::of(&poly([2.0, 3.0, 0.0, 0.0, 0.0, 0.0]), IntegrationConstant::Zero);
        assert_eq!(a.coefficients(), &[0.0, 2.0, 1.5, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_leading_coefficient_constant() {
        // Historical rule: C is taken from the x⁵ slot.
        let p = poly([1.0, 0.0, 0.0, 0.0, 0.0, 4.0]);
        let legacy = Antiderivative::of(&p, IntegrationConstant::LeadingCoefficient);
        let zero = Antiderivative::of(&p, IntegrationConstant::Zero);

        assert_eq!(legacy.constant(), 4.0);
        assert_eq!(zero.constant(), 0.0);
        assert_eq!(legacy.evaluate(0.0) - zero.evaluate(0.0), 4.0);
    }

    #[test]
    fn test_constant_cancels_in_difference() {
        let p = poly([1.0, -2.0, 0.0, 3.0, 0.0, 4.0]);
        let legacy = Antiderivative::of(&p, IntegrationConstant::LeadingCoefficient);
        let zero = Antiderivative::of(&p, IntegrationConstant::Zero);

        let d_legacy = legacy.evaluate(1.5) - legacy.evaluate(-0.5);
        let d_zero = zero.evaluate(1.5) - zero.evaluate(-0.5);
        assert!((d_legacy - d_zero).abs() < 1e-12);
    }

    #[test]
    fn test_verify_antiderivative() {
        let p = poly([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let a = Antiderivative::of(&p, IntegrationConstant::Zero);
        assert!(verify_antiderivative(&p, &a));

        let q = poly([1.0, 2.0, 3.0, 4.0, 5.0, 7.0]);
        assert!(!verify_antiderivative(&q, &a));
    }

    #[test]
    fn test_power_rule_general() {
        // ∫ x^n dx = x^(n+1) / (n+1)
        for n in 0..6 {
            let mut coeffs = [0.0; 6];
            coeffs[n] = 1.0;
            let p = poly(coeffs);

            let a = Antiderivative::of(&p, IntegrationConstant::Zero);
            assert_eq!(a.coefficients()[n + 1], 1.0 / (n + 1) as f64);
            assert!(verify_antiderivative(&p, &a));
        }
    }
}
