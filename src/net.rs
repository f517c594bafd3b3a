//! **Mathematical Foundation: Unrolled Prism Nets**
//!
//! The lateral surface of a right elliptical prism unrolls onto the plane
//! without distortion: the base ellipse becomes a straight segment of length
//! equal to its perimeter, and height is preserved. An angled cutting plane
//! sweeping around the circumference traces, on the unrolled surface, a curve
//! approximated here by one period of a sinusoid:
//!
//! ```text
//! y(t) = start + A · (1 + sin(2π·t/C ∓ π/2)),   A = a · tan(angle)
//! ```
//!
//! where `C` is the ellipse perimeter, `a` the semi-major axis (the widest
//! radius governs the maximum vertical excursion), and the ∓π/2 phase puts
//! t = 0 at the major-axis vertex, where each curve sits at its extreme
//! value. Cut 1 starts at its minimum (`y(0) = start`), cut 2 at its maximum
//! (`y(0) = start + 2A`). Every sample is then clipped to `[0, height]`:
//! a physical cut cannot pass below the base or above the top rim.

use crate::ellipse;
use crate::errors::GeometryError;
use crate::float_types::{FRAC_PI_2, Real, TAU};
use nalgebra::Point2;
use tracing::debug;

/// Number of arc-length samples used by [`NetParams::new`].
pub const DEFAULT_SAMPLES: usize = 200;

/// One angled cut through the prism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutSpec {
    /// Inclination of the cutting plane in degrees, strictly between -90 and 90
    pub angle_deg: Real,
    /// Nominal height of the cut at its zero-crossing; may fall outside
    /// `[0, height]`, clipping takes care of it
    pub start_height: Real,
}

impl CutSpec {
    pub const fn new(angle_deg: Real, start_height: Real) -> Self {
        CutSpec { angle_deg, start_height }
    }
}

/// Everything [`compute_net`] needs: the ellipse cross-section, the prism
/// height, and the two cuts.
#[derive(Debug, Clone, PartialEq)]
pub struct NetParams {
    /// Semi-major axis of the base ellipse
    pub major_axis: Real,
    /// Semi-minor axis of the base ellipse
    pub minor_axis: Real,
    /// Height of the prism
    pub height: Real,
    pub cut1: CutSpec,
    pub cut2: CutSpec,
    /// Number of samples along the unrolled circumference, minimum 2
    pub samples: usize,
}

impl NetParams {
    /// Convenience constructor using [`DEFAULT_SAMPLES`].
    pub const fn new(
        major_axis: Real,
        minor_axis: Real,
        height: Real,
        cut1: CutSpec,
        cut2: CutSpec,
    ) -> Self {
        NetParams {
            major_axis,
            minor_axis,
            height,
            cut1,
            cut2,
            samples: DEFAULT_SAMPLES,
        }
    }

    fn validate(&self) -> Result<(), GeometryError> {
        if !(self.major_axis.is_finite() && self.major_axis > 0.0) {
            return Err(GeometryError::NonPositiveAxis {
                name: "major",
                value: self.major_axis,
            });
        }
        if !(self.minor_axis.is_finite() && self.minor_axis > 0.0) {
            return Err(GeometryError::NonPositiveAxis {
                name: "minor",
                value: self.minor_axis,
            });
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(GeometryError::NonPositiveHeight(self.height));
        }
        for (name, cut) in [("cut 1", &self.cut1), ("cut 2", &self.cut2)] {
            if !cut.angle_deg.is_finite() || cut.angle_deg.abs() >= 90.0 {
                return Err(GeometryError::SteepCutAngle {
                    cut: name,
                    angle_deg: cut.angle_deg,
                });
            }
        }
        if self.samples < 2 {
            return Err(GeometryError::TooFewSamples(self.samples));
        }
        Ok(())
    }
}

/// The flattened lateral surface, ready to plot. Recomputed from scratch on
/// every [`compute_net`] call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrolledNet {
    /// Arc length of the base ellipse, the width of the unrolled surface
    pub perimeter: Real,
    /// Arc-length parameter values, evenly spaced over `[0, perimeter]`
    /// inclusive, strictly increasing
    pub samples: Vec<Real>,
    /// First cut curve as `(t, y)` points, y clipped to `[0, height]`
    pub cut1: Vec<Point2<Real>>,
    /// Second cut curve, same sampling and clipping as `cut1`
    pub cut2: Vec<Point2<Real>>,
}

impl UnrolledNet {
    /// The straight reference line along the base, from `(0, 0)` to
    /// `(perimeter, 0)`.
    pub fn bottom_edge(&self) -> [Point2<Real>; 2] {
        [Point2::new(0.0, 0.0), Point2::new(self.perimeter, 0.0)]
    }
}

/// Computes the unrolled net for the given parameters.
///
/// Pure function: no side effects beyond `tracing` events, identical inputs
/// produce identical outputs. Fails with [`GeometryError`] on degenerate
/// axes or heights, cut angles at or beyond ±90°, or fewer than 2 samples;
/// callers must not render a net they did not get.
pub fn compute_net(params: &NetParams) -> Result<UnrolledNet, GeometryError> {
    params.validate()?;

    let perimeter = ellipse::perimeter(params.major_axis, params.minor_axis);
    debug!(perimeter, "perimeter calculated");

    let n = params.samples;
    let samples: Vec<Real> = (0..n)
        .map(|i| perimeter * (i as Real) / ((n - 1) as Real))
        .collect();

    // tan is finite here: validate() rejected angles at ±90°
    let amplitude1 = params.major_axis * params.cut1.angle_deg.to_radians().tan();
    let amplitude2 = params.major_axis * params.cut2.angle_deg.to_radians().tan();

    let trace = |amplitude: Real, start: Real, phase: Real| -> Vec<Point2<Real>> {
        samples
            .iter()
            .map(|&t| {
                let y = start + amplitude * (1.0 + (TAU * t / perimeter + phase).sin());
                Point2::new(t, y.clamp(0.0, params.height))
            })
            .collect()
    };

    let cut1 = trace(amplitude1, params.cut1.start_height, -FRAC_PI_2);
    let cut2 = trace(amplitude2, params.cut2.start_height, FRAC_PI_2);

    Ok(UnrolledNet {
        perimeter,
        samples,
        cut1,
        cut2,
    })
}
