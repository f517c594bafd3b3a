//! Flattened ("net") cutting templates for **elliptical-prism lampshades**.
//!
//! Given an ellipse cross-section, a prism height, and two angled cutting
//! planes, this crate computes the unrolled lateral surface of the prism and
//! renders it as a printable A4-landscape PDF: a straight bottom edge plus two
//! sinusoidal cut curves, clipped to the shade's height.
//!
//! The geometry lives in [`net`] and is a pure function of its parameters;
//! rendering is a separate concern in [`render`] backed by cairo's PDF
//! surface. The `prismnet` binary wires both together with fixed lampshade
//! dimensions and logs progress via `tracing`.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod ellipse;
pub mod net;
pub mod render;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use net::{CutSpec, NetParams, UnrolledNet, compute_net};
