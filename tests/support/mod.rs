//! Test support library
//! Provides various helper functions & utilities for tests.

use prismnet::float_types::Real;
use prismnet::net::{CutSpec, NetParams};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The lampshade the binary is hard-wired for: 12x4 mm cross-section,
/// 25 mm tall, two 45-degree cuts starting at 3 mm and 1 mm.
pub fn lampshade_params() -> NetParams {
    NetParams::new(
        12.0,
        4.0,
        25.0,
        CutSpec::new(45.0, 3.0),
        CutSpec::new(45.0, 1.0),
    )
}
