//! # quintic-analysis
//!
//! Critical-point classification for Quintic polynomials.
//!
//! This crate provides:
//! - Extrema (roots of p′), inflection points (roots of p″) and saddle
//!   points (roots of p″ where p′ also vanishes), each paired with the
//!   original polynomial's value
//! - [`PolynomialAnalysis`], a single memoized pass over one polynomial
//!   for callers that display everything at once
//!
//! Every query is a separate fallible operation. A property that is not
//! defined for the polynomial's degree, or whose defining derivative has
//! no real roots, is reported as an [`AnalysisError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod critical;
pub mod error;
pub mod summary;

#[cfg(test)]
mod proptests;

pub use critical::{
    extrema, extrema_with, inflection_points, inflection_points_with, saddle_points,
    saddle_points_with, saddle_points_within, CriticalKind, CriticalPoint,
};
pub use error::AnalysisError;
pub use summary::PolynomialAnalysis;
