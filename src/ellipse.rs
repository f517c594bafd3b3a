//! Ellipse boundary geometry: perimeter and parametric tracing

use crate::float_types::{PI, Real, TAU};
use nalgebra::Point2;

/// **Mathematical Foundation: Ellipse Perimeter (Ramanujan II)**
///
/// The arc length of an ellipse has no elementary closed form (it is a
/// complete elliptic integral of the second kind), so an approximation must
/// be chosen. This crate uses Ramanujan's second approximation:
///
/// ```text
/// h = ((a - b) / (a + b))²
/// C ≈ π (a + b) (1 + 3h / (10 + √(4 - 3h)))
/// ```
///
/// The relative error is O(h⁵); for a 12×4 mm lampshade cross-section
/// (h = 0.25) it is below 1e-6, far under any cutting tolerance. The choice
/// is cross-checked in the test suite against a dense polyline trace of the
/// boundary.
///
/// Callers guarantee `a` and `b` are positive; see
/// [`NetParams`](crate::net::NetParams) validation.
pub fn perimeter(a: Real, b: Real) -> Real {
    let h = ((a - b) / (a + b)).powi(2);
    PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

/// Traces the ellipse boundary with uniform parameter sampling
/// `(a·cosθ, b·sinθ)`, θ ∈ [0, 2π], returning a closed ring whose last point
/// repeats the first.
///
/// Parameter-uniform sampling is not arc-length uniform, but the total
/// polyline length still converges to the true perimeter as O(1/n²), which
/// is what [`polyline_length`] relies on when cross-checking [`perimeter`].
pub fn boundary_points(a: Real, b: Real, segments: usize) -> Vec<Point2<Real>> {
    let mut points: Vec<Point2<Real>> = (0..segments)
        .map(|i| {
            let theta = TAU * (i as Real) / (segments as Real);
            Point2::new(a * theta.cos(), b * theta.sin())
        })
        .collect();
    points.push(points[0]);
    points
}

/// Sum of the segment lengths of a polyline.
pub fn polyline_length(points: &[Point2<Real>]) -> Real {
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .sum()
}
