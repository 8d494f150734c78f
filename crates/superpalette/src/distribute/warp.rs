//! Contrast warps applied to normalized distances from the anchor.

/// Exponent of the power curve blended in by a contrast warp.
const WARP_POWER: f64 = 1.5;
/// Contrast headroom above 1.0 over which the high warp reaches full strength.
const HIGH_SPAN: f64 = 4.0;
/// Contrast headroom below 1.0 over which the low warp reaches full strength.
const LOW_SPAN: f64 = 0.9;

/// How distances from the anchor are reshaped before mapping to arc length.
///
/// Each variant blends the identity with a power curve; `blend` is the weight
/// of the power curve in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Warp {
    /// Distances are used as-is.
    Linear,
    /// Contrast above 1: blends in `d^(1/1.5)`, pushing swatches outward.
    High {
        /// Weight of the power curve.
        blend: f64,
    },
    /// Contrast below 1: blends in `d^1.5`, pulling swatches toward the anchor.
    Low {
        /// Weight of the power curve.
        blend: f64,
    },
}

impl Warp {
    /// Classify a contrast factor.
    pub fn from_contrast(contrast: f64) -> Self {
        if contrast > 1.0 {
            Self::High {
                blend: ((contrast - 1.0) / HIGH_SPAN).min(1.0),
            }
        } else if contrast < 1.0 {
            Self::Low {
                blend: ((1.0 - contrast) / LOW_SPAN).min(1.0),
            }
        } else {
            Self::Linear
        }
    }

    /// Reshape a normalized distance in `[0, 1]`.
    pub fn apply(self, distance: f64) -> f64 {
        let (blend, warped) = match self {
            Self::Linear => return distance,
            Self::High { blend } => (blend, distance.powf(1.0 / WARP_POWER)),
            Self::Low { blend } => (blend, distance.powf(WARP_POWER)),
        };
        (1.0 - blend) * distance + blend * warped
    }
}
