//! Palette generation parameters.

use crate::{
    config::EngineConfig,
    error::{Error, Result},
};

/// Parameters for one palette generation.
///
/// The anchor is the selected color's saturation and value mapped into the
/// unit square. Smart spacing and a non-linear contrast are mutually
/// exclusive: [`DistributionRequest::with_smart_spacing`] resets contrast to
/// 1.0. Only a request whose fields were set directly can still carry both,
/// and [`DistributionRequest::validate`] rejects it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionRequest {
    /// Anchor saturation in `[0, 1]`.
    pub anchor_x: f64,
    /// Anchor value in `[0, 1]`.
    pub anchor_y: f64,
    /// Total number of curve swatches, anchor included.
    pub count: usize,
    /// Contrast factor; 1.0 is linear.
    pub contrast: f64,
    /// Split swatches proportionally to the anchor's arc-length position.
    pub smart_spacing: bool,
    /// Saturation percentage the muted curve keeps, in `[0, 100]`.
    ///
    /// `100` means no desaturation (the muted curve equals the main curve);
    /// `0` collapses the muted curve onto the grey axis.
    pub desaturation: f64,
    /// Add fixed black and white swatches at the ends.
    pub include_black_white: bool,
}

impl Default for DistributionRequest {
    fn default() -> Self {
        Self {
            anchor_x: 0.5,
            anchor_y: 0.5,
            count: 10,
            contrast: 1.0,
            smart_spacing: false,
            desaturation: 20.0,
            include_black_white: false,
        }
    }
}

impl DistributionRequest {
    /// A request anchored at `(x, y)` with default spacing parameters.
    pub fn new(anchor_x: f64, anchor_y: f64) -> Self {
        Self {
            anchor_x,
            anchor_y,
            ..Self::default()
        }
    }

    /// Set the swatch count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the contrast factor.
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    /// Toggle smart spacing. Enabling it forces contrast back to 1.0.
    pub fn with_smart_spacing(mut self, enabled: bool) -> Self {
        self.smart_spacing = enabled;
        if enabled {
            self.contrast = 1.0;
        }
        self
    }

    /// Set the saturation percentage the muted curve keeps; `100` leaves it
    /// undesaturated.
    pub fn with_desaturation(mut self, percent: f64) -> Self {
        self.desaturation = percent;
        self
    }

    /// Toggle the fixed black and white end swatches.
    pub fn with_black_white(mut self, enabled: bool) -> Self {
        self.include_black_white = enabled;
        self
    }

    /// Whether the contrast warp is active.
    pub fn uses_contrast(&self) -> bool {
        self.contrast != 1.0
    }

    /// Check the request against the bounds in `config`.
    pub fn validate(&self, config: &EngineConfig) -> Result<()> {
        let unit = 0.0..=1.0;
        if !(unit.contains(&self.anchor_x) && unit.contains(&self.anchor_y)) {
            return Err(Error::AnchorOutOfRange {
                x: self.anchor_x,
                y: self.anchor_y,
            });
        }
        if !(config.count_min..=config.count_max).contains(&self.count) {
            return Err(Error::CountOutOfRange {
                count: self.count,
                min: config.count_min,
                max: config.count_max,
            });
        }
        if !(config.contrast_min..=config.contrast_max).contains(&self.contrast) {
            return Err(Error::ContrastOutOfRange {
                contrast: self.contrast,
                min: config.contrast_min,
                max: config.contrast_max,
            });
        }
        if !(0.0..=100.0).contains(&self.desaturation) {
            return Err(Error::DesaturationOutOfRange(self.desaturation));
        }
        if self.smart_spacing && self.uses_contrast() {
            return Err(Error::ConflictingSpacing(self.contrast));
        }
        Ok(())
    }
}
