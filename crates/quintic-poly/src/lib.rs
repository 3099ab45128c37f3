//! # quintic-poly
//!
//! Real polynomials of degree at most five.
//!
//! This crate provides:
//! - Fixed six-slot coefficient vectors and the transforms on them
//!   (degree, symmetry, evaluation, derivative, antiderivative)
//! - An immutable [`Polynomial`] value wrapping those coefficients
//! - An [`Antiderivative`] value one degree higher than its source
//!
//! ## Layout
//!
//! Coefficients are stored lowest power first: index `i` holds the
//! coefficient of `x^i`. A polynomial never changes after construction;
//! every transform yields a new value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod antiderivative;
pub mod error;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use algebra::{Coefficients, COEFFICIENT_COUNT};
pub use antiderivative::{verify_antiderivative, Antiderivative, IntegrationConstant};
pub use error::PolyError;
pub use polynomial::{Polynomial, Symmetry};
