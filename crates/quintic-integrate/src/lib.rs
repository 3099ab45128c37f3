//! Definite integrals of Quintic polynomials.
//!
//! Integrals are evaluated in closed form through the antiderivative
//! (fundamental theorem of calculus); nothing here is numerical
//! quadrature.
//!
//! # Example
//!
//! ```ignore
//! use quintic_integrate::definite_integral;
//! use quintic_poly::Polynomial;
//!
//! // ∫₀² x dx = 2
//! let p = Polynomial::new([0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
//! assert_eq!(definite_integral(&p, 0.0, 2.0), 2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definite;

pub use definite::{
    definite_integral, definite_integral_with, ConstantIntegralRule, IntegralOptions,
    DEFAULT_CONSTANT_INTEGRAL_RULE,
};
