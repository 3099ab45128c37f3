//! Real root finding for Quintic polynomials.
//!
//! This crate provides a derivative-seeded, multi-start Newton–Raphson
//! solver:
//!
//! - **Seeding**: the roots of p′ are found first (recursively); a dense
//!   band of starting values is laid around each of them. Between two
//!   consecutive real roots of p there is always a root of p′, so the band
//!   reaches every basin even though Newton's method does not bracket.
//! - **Iteration**: plain Newton steps from every seed, discarding seeds
//!   that diverge or fail to settle.
//! - **Cleanup**: candidates are snapped to integers or rounded to a fixed
//!   number of decimals, deduplicated, and sorted.
//!
//! # Example
//!
//! ```ignore
//! use quintic_poly::Polynomial;
//! use quintic_solve::real_roots;
//!
//! // x³ - x
//! let p = Polynomial::new([0.0, -1.0, 0.0, 1.0, 0.0, 0.0]);
//! assert_eq!(real_roots(&p), vec![-1.0, 0.0, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cleanup;
pub mod newton;
pub mod options;
pub mod seeds;

#[cfg(test)]
mod proptests;

pub use cleanup::{dedup_roots, round_to, snap_root};
pub use newton::{real_roots, real_roots_with, NewtonFinder};
pub use options::NewtonOptions;
pub use seeds::starting_values;
