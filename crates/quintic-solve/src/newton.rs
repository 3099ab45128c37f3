//! Multi-start Newton–Raphson root finding.

use quintic_poly::Polynomial;
use tracing::{debug, trace};

use crate::cleanup::{dedup_roots, snap_root};
use crate::options::NewtonOptions;
use crate::seeds::starting_values;

/// Finds the real roots of a [`Polynomial`].
///
/// # Example
///
/// ```ignore
/// let finder = NewtonFinder::new(NewtonOptions::default().with_decimals(3));
/// let roots = finder.roots(&p);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NewtonFinder {
    options: NewtonOptions,
}

impl NewtonFinder {
    /// Creates a finder with the given options.
    #[must_use]
    pub fn new(options: NewtonOptions) -> Self {
        Self { options }
    }

    /// Returns the finder's options.
    #[must_use]
    pub fn options(&self) -> &NewtonOptions {
        &self.options
    }

    /// Returns the deduplicated real roots of `p` in ascending order.
    ///
    /// The search recurses down the derivative chain: the roots of p′
    /// become the centers of p's seed bands. A constant has no roots.
    /// Finding nothing is not an error; the list is simply empty.
    #[must_use]
    pub fn roots(&self, p: &Polynomial) -> Vec<f64> {
        if p.degree() == 0 {
            return Vec::new();
        }

        let derivative = p.derivative();
        let critical_points = self.roots(&derivative);
        let seeds = starting_values(&critical_points, &self.options);

        let candidates: Vec<f64> = seeds
            .iter()
            .filter_map(|&seed| self.iterate(p, &derivative, seed))
            .map(|root| snap_root(root, &self.options))
            .collect();
        let roots = dedup_roots(candidates.iter().copied(), self.options.dedup_tolerance);

        debug!(
            degree = p.degree(),
            derivation_order = p.derivation_order(),
            seeds = seeds.len(),
            candidates = candidates.len(),
            roots = roots.len(),
            "root search finished"
        );
        roots
    }

    /// Runs Newton's method on `p` from `seed`.
    ///
    /// Returns the iterate once a step falls below the tolerance, or `None`
    /// if the iteration produces a non-finite value (p′ vanished) or runs
    /// out of steps.
    #[must_use]
    pub fn iterate(&self, p: &Polynomial, derivative: &Polynomial, seed: f64) -> Option<f64> {
        let mut x = seed;

        for _ in 0..self.options.max_iterations {
            let delta = p.evaluate(x) / derivative.evaluate(x);
            x -= delta;

            if !x.is_finite() {
                trace!(seed, "newton step diverged");
                return None;
            }

            if delta.abs() < self.options.tolerance {
                return Some(x);
            }
        }

        trace!(seed, last = x, "newton iteration did not converge");
        None
    }
}

/// Finds the real roots of `p` with the default options.
#[must_use]
pub fn real_roots(p: &Polynomial) -> Vec<f64> {
    NewtonFinder::default().roots(p)
}

/// Finds the real roots of `p` with explicit options.
#[must_use]
pub fn real_roots_with(p: &Polynomial, options: &NewtonOptions) -> Vec<f64> {
    NewtonFinder::new(options.clone()).roots(p)
}
