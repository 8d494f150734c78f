//! Color palettes distributed along a superellipse.
//!
//! Given an anchor color's saturation and value, the engine fits a quarter
//! superellipse `x^n + y^n = 1` through it, parameterizes the curve by arc
//! length and spreads swatches along it on either side of the anchor. A
//! second, horizontally compressed curve yields muted variants at the same
//! arc-length positions.
//!
//! Colorspace conversion is left to the caller: every swatch exposes its
//! unit-square coordinates, read as `(hue, x * 100, y * 100)` in HSV.
//!
//! ```
//! use superpalette::{DistributionRequest, EngineConfig, generate};
//!
//! let request = DistributionRequest::new(0.81, 0.78).with_count(10);
//! let palette = generate(&request, &EngineConfig::default())?;
//! assert_eq!(palette.swatches.len(), 10);
//! # Ok::<(), superpalette::error::Error>(())
//! ```

/// Engine bounds and constants.
pub mod config;
/// Superellipse fitting, sampling and lookup.
pub mod curve;
/// Arc-length distribution of swatches.
pub mod distribute;
/// Error types used across the crate.
pub mod error;
/// End-to-end palette generation.
mod palette;
/// Curve samples.
pub mod point;
/// Generation parameters.
pub mod request;
/// Swatch descriptors and assembly.
pub mod swatch;

pub use crate::{
    config::EngineConfig,
    curve::{CurveSample, find_exponent},
    palette::{Palette, fit_and_distribute, generate},
    request::DistributionRequest,
};
