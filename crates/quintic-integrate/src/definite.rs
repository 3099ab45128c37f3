//! Definite integration over a bounded interval.
//!
//! The bounds may be given in either order. The result is the absolute
//! value of `A(hi) - A(lo)`, i.e. the unsigned net area the calculator
//! reports, not a signed integral.

use quintic_poly::Polynomial;

/// How a constant (degree-0) polynomial is integrated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstantIntegralRule {
    /// Same path as every other degree: `|A(hi) - A(lo)|`, which for a
    /// constant `c` is `|c · (hi - lo)|`.
    Antiderivative,
    /// `(|lo| + |hi|) · c`, as computed by earlier releases.
    ///
    /// Only agrees with the true integral when one bound is zero or the
    /// bounds straddle zero.
    LegacyAbsoluteBounds,
}

/// The rule used by [`definite_integral`].
pub const DEFAULT_CONSTANT_INTEGRAL_RULE: ConstantIntegralRule =
    ConstantIntegralRule::Antiderivative;

/// Options for [`definite_integral_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegralOptions {
    /// Rule applied to degree-0 polynomials.
    pub constant_rule: ConstantIntegralRule,
}

impl Default for IntegralOptions {
    fn default() -> Self {
        Self {
            constant_rule: DEFAULT_CONSTANT_INTEGRAL_RULE,
        }
    }
}

/// Computes the unsigned definite integral of `p` between `x1` and `x2`.
#[must_use]
pub fn definite_integral(p: &Polynomial, x1: f64, x2: f64) -> f64 {
    definite_integral_with(p, x1, x2, &IntegralOptions::default())
}

/// Computes the unsigned definite integral with explicit options.
#[must_use]
pub fn definite_integral_with(p: &Polynomial, x1: f64, x2: f64, options: &IntegralOptions) -> f64 {
    let lo = x1.min(x2);
    let hi = x1.max(x2);

    if p.degree() == 0 && options.constant_rule == ConstantIntegralRule::LegacyAbsoluteBounds {
        return (lo.abs() + hi.abs()) * p.coeff(0);
    }

    let antiderivative = p.antiderivative();
    (antiderivative.evaluate(hi) - antiderivative.evaluate(lo)).abs()
}
