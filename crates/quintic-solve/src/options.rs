//! Solver configuration.

/// Tuning knobs for [`NewtonFinder`](crate::NewtonFinder).
///
/// The defaults reproduce the calculator's established behaviour; change
/// them only when the trade-off is understood.
#[derive(Clone, Debug, PartialEq)]
pub struct NewtonOptions {
    /// A step smaller than this (in absolute value) accepts the iterate.
    pub tolerance: f64,
    /// Newton steps allowed per seed.
    pub max_iterations: usize,
    /// Seeds span `center - seed_radius ..= center + seed_radius`.
    pub seed_radius: f64,
    /// Distance between neighbouring seeds.
    pub seed_step: f64,
    /// Candidates this close to an integer are snapped to it.
    pub snap_tolerance: f64,
    /// Decimal places kept for candidates that are not snapped.
    pub decimals: i32,
    /// Candidates this close to an earlier one are dropped.
    pub dedup_tolerance: f64,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
            seed_radius: 25.0,
            seed_step: 0.5,
            snap_tolerance: 1e-4,
            decimals: 2,
            dedup_tolerance: 1e-4,
        }
    }
}

impl NewtonOptions {
    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the per-seed iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the seed band's radius and spacing.
    #[must_use]
    pub fn with_seed_band(mut self, radius: f64, step: f64) -> Self {
        self.seed_radius = radius;
        self.seed_step = step;
        self
    }

    /// Sets the number of decimals kept for non-integer roots.
    #[must_use]
    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Returns the number of seeds laid around each center.
    ///
    /// A non-positive step degenerates to the center alone.
    #[must_use]
    pub fn seeds_per_center(&self) -> usize {
        if self.seed_step > 0.0 && self.seed_radius >= 0.0 {
            (2.0 * self.seed_radius / self.seed_step).round() as usize + 1
        } else {
            1
        }
    }
}
