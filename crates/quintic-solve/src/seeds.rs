//! Starting values for Newton iteration.

use crate::options::NewtonOptions;

/// Lays a band of seeds around every critical point.
///
/// With no critical points (p′ has no real roots, or p is linear) a single
/// band around the origin is used. Seeds are generated by index rather
/// than by repeated addition so the upper end of each band is always
/// reached.
#[must_use]
pub fn starting_values(critical_points: &[f64], options: &NewtonOptions) -> Vec<f64> {
    let centers: &[f64] = if critical_points.is_empty() {
        &[0.0]
    } else {
        critical_points
    };

    let per_center = options.seeds_per_center();
    let radius = if per_center > 1 { options.seed_radius } else { 0.0 };
    let step = options.seed_step;

    let mut seeds = Vec::with_capacity(centers.len() * per_center);
    for &center in centers {
        let low = center - radius;
        seeds.extend((0..per_center).map(|k| low + k as f64 * step));
    }
    seeds
}
