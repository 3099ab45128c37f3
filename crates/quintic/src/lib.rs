//! # Quintic
//!
//! The polynomial analysis engine behind a graphing calculator.
//!
//! Quintic works on real polynomials of degree at most five, given as six
//! coefficients lowest power first, and answers the questions a plotting
//! front end asks about them:
//!
//! - **Algebra**: degree, symmetry, evaluation, derivatives, antiderivatives
//! - **Roots**: derivative-seeded multi-start Newton–Raphson
//! - **Critical points**: extrema, inflection points, saddle points
//! - **Integrals**: unsigned definite integrals between two bounds
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quintic::prelude::*;
//!
//! let p = Polynomial::from_slice(&[5.0, -2.0, 8.0, 6.0, 0.0, 0.0])?;
//! let analysis = PolynomialAnalysis::new(p);
//!
//! for point in analysis.extrema()? {
//!     println!("extremum at ({}, {})", point.x, point.y);
//! }
//! let area = definite_integral(&p, -1.0, 1.0);
//! ```
//!
//! Nothing here draws, formats or stores anything; those concerns belong
//! to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quintic_analysis as analysis;
pub use quintic_integrate as integrate;
pub use quintic_poly as poly;
pub use quintic_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quintic_analysis::{
        extrema, inflection_points, saddle_points, AnalysisError, CriticalKind, CriticalPoint,
        PolynomialAnalysis,
    };
    pub use quintic_integrate::{definite_integral, IntegralOptions};
    pub use quintic_poly::{Antiderivative, IntegrationConstant, PolyError, Polynomial, Symmetry};
    pub use quintic_solve::{real_roots, NewtonFinder, NewtonOptions};
}
