//! Parameter validation and rendering errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a set of net parameters can fail validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (NonPositiveAxis) An ellipse semi-axis is zero, negative, or non-finite
    NonPositiveAxis { name: &'static str, value: Real },
    /// (NonPositiveHeight) The prism height is zero, negative, or non-finite
    NonPositiveHeight(Real),
    /// (SteepCutAngle) A cut angle lies outside (-90°, 90°), where the tangent is unbounded
    SteepCutAngle { cut: &'static str, angle_deg: Real },
    /// (TooFewSamples) Fewer than two arc-length samples requested
    TooFewSamples(usize),
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::NonPositiveAxis { name, value } => write!(f, "(NonPositiveAxis) The {} semi-axis must be positive and finite, got: {}", name, value),
            GeometryError::NonPositiveHeight(value) => write!(f, "(NonPositiveHeight) The prism height must be positive and finite, got: {}", value),
            GeometryError::SteepCutAngle { cut, angle_deg } => write!(f, "(SteepCutAngle) The {} angle must lie strictly between -90° and 90°, got: {}°", cut, angle_deg),
            GeometryError::TooFewSamples(n) => write!(f, "(TooFewSamples) At least 2 arc-length samples are required, got: {}", n),
        }
    }
}

/// Failures while drawing or writing the template document
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Any error surfaced by the cairo PDF surface, including file I/O
    Cairo(#[from] cairo::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Cairo(cairo_error) => write!(f, "cairo rendering failed: {}", cairo_error),
        }
    }
}
