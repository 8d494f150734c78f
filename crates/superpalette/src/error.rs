//! Error types for request and configuration validation.
//!
//! The numerical core itself is total: degenerate inputs are clamped or fall
//! back to a safe answer. Errors only describe inputs a caller must not hand
//! to the engine in the first place.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures for palette requests and engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The anchor does not lie inside the unit square.
    #[error("anchor ({x}, {y}) must lie inside the unit square")]
    AnchorOutOfRange {
        /// Requested saturation coordinate.
        x: f64,
        /// Requested value coordinate.
        y: f64,
    },

    /// Swatch count outside the configured bounds.
    #[error("swatch count {count} must be between {min} and {max}")]
    CountOutOfRange {
        /// Requested count.
        count: usize,
        /// Smallest allowed count.
        min: usize,
        /// Largest allowed count.
        max: usize,
    },

    /// Contrast factor outside the configured bounds.
    #[error("contrast {contrast} must be between {min} and {max}")]
    ContrastOutOfRange {
        /// Requested contrast.
        contrast: f64,
        /// Smallest allowed contrast.
        min: f64,
        /// Largest allowed contrast.
        max: f64,
    },

    /// Desaturation percentage outside `[0, 100]`.
    #[error("desaturation {0} must be a percentage between 0 and 100")]
    DesaturationOutOfRange(f64),

    /// Smart spacing requested together with a non-linear contrast.
    #[error("smart spacing cannot be combined with contrast {0} (must be 1.0)")]
    ConflictingSpacing(f64),

    /// Engine configuration bounds are inconsistent.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}
