//! Errors raised while building or sampling polynomials.

use thiserror::Error;

/// Errors that can occur when constructing or sampling a polynomial.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// The coefficient input did not have exactly six entries.
    #[error("wrong input length: expected 6 coefficients, got {len}")]
    InvalidArity {
        /// Length of the rejected input.
        len: usize,
    },

    /// A sampling range whose end is not strictly greater than its start.
    #[error("invalid range: end ({end}) must be greater than start ({start})")]
    InvalidRange {
        /// Requested start of the range.
        start: f64,
        /// Requested end of the range.
        end: f64,
    },
}
