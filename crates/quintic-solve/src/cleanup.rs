//! Post-processing of converged Newton candidates.

use crate::options::NewtonOptions;

/// Rounds `x` to `decimals` decimal places.
#[must_use]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

/// Snaps a candidate to the nearest integer if it lies within the snap
/// tolerance, otherwise rounds it to the configured decimals.
///
/// Negative zero is normalized to zero.
#[must_use]
pub fn snap_root(x: f64, options: &NewtonOptions) -> f64 {
    let nearest = x.round();
    let snapped = if (x - nearest).abs() <= options.snap_tolerance {
        nearest
    } else {
        round_to(x, options.decimals)
    };
    snapped + 0.0
}

/// Collapses candidates lying within `tolerance` of an earlier candidate
/// and returns the survivors in ascending order.
///
/// Closeness is the signed difference `|a - b|`, not `||a| - |b||`, so
/// `r` and `-r` stay distinct.
#[must_use]
pub fn dedup_roots<I>(candidates: I, tolerance: f64) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut unique: Vec<f64> = Vec::new();
    for candidate in candidates {
        if !unique.iter().any(|&kept| (kept - candidate).abs() <= tolerance) {
            unique.push(candidate);
        }
    }
    unique.sort_by(f64::total_cmp);
    unique
}
