//! Engine bounds and tuning constants.
//!
//! Every numeric bound the engine consumes lives in [`EngineConfig`], which is
//! passed explicitly into the entry points. There is no process-wide state.

use crate::error::{Error, Result};

/// Smallest superellipse exponent the fit may return.
pub const N_MIN: f64 = 0.1;
/// Largest superellipse exponent the fit may return.
pub const N_MAX: f64 = 25.0;
/// Residual at which the exponent bisection stops early.
pub const TOLERANCE: f64 = 0.001;
/// Upper bound on bisection steps.
pub const MAX_ITERATIONS: u32 = 100;
/// Number of segments used to sample a curve.
pub const CURVE_RESOLUTION: usize = 400;
/// Smallest accepted contrast factor.
pub const CONTRAST_MIN: f64 = 0.1;
/// Largest accepted contrast factor.
pub const CONTRAST_MAX: f64 = 5.0;
/// Smallest accepted swatch count.
pub const COLOR_COUNT_MIN: usize = 1;
/// Largest accepted swatch count.
pub const COLOR_COUNT_MAX: usize = 50;

/// Immutable configuration for the curve engine and distributor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Lower bound of the exponent search bracket.
    pub exponent_min: f64,
    /// Upper bound of the exponent search bracket.
    pub exponent_max: f64,
    /// Early-exit residual for the bisection.
    pub tolerance: f64,
    /// Maximum number of bisection steps.
    pub max_iterations: u32,
    /// Segments per sampled curve (the curve holds `resolution + 1` samples).
    pub resolution: usize,
    /// Smallest contrast factor a request may use.
    pub contrast_min: f64,
    /// Largest contrast factor a request may use.
    pub contrast_max: f64,
    /// Smallest swatch count a request may use.
    pub count_min: usize,
    /// Largest swatch count a request may use.
    pub count_max: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exponent_min: N_MIN,
            exponent_max: N_MAX,
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            resolution: CURVE_RESOLUTION,
            contrast_min: CONTRAST_MIN,
            contrast_max: CONTRAST_MAX,
            count_min: COLOR_COUNT_MIN,
            count_max: COLOR_COUNT_MAX,
        }
    }
}

impl EngineConfig {
    /// Check that the bounds describe a usable engine.
    pub fn validate(&self) -> Result<()> {
        if !(self.exponent_min > 0.0 && self.exponent_min < self.exponent_max) {
            return Err(Error::InvalidConfig(format!(
                "exponent bounds must satisfy 0 < min < max, got {}..{}",
                self.exponent_min, self.exponent_max
            )));
        }
        if !(self.tolerance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig("max_iterations must be >= 1".into()));
        }
        if self.resolution == 0 {
            return Err(Error::InvalidConfig("resolution must be >= 1".into()));
        }
        if !(self.contrast_min > 0.0 && self.contrast_min <= 1.0 && self.contrast_max >= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "contrast bounds must satisfy 0 < min <= 1 <= max, got {}..{}",
                self.contrast_min, self.contrast_max
            )));
        }
        if self.count_min == 0 || self.count_min > self.count_max {
            return Err(Error::InvalidConfig(format!(
                "count bounds must satisfy 1 <= min <= max, got {}..{}",
                self.count_min, self.count_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.resolution, 400);
        assert_eq!(config.exponent_max, 25.0);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = EngineConfig {
            exponent_min: 5.0,
            exponent_max: 1.0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = EngineConfig {
            count_min: 10,
            count_max: 5,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        // Linear contrast must always be reachable.
        let config = EngineConfig {
            contrast_min: 1.5,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_resolution() {
        let config = EngineConfig {
            resolution: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
