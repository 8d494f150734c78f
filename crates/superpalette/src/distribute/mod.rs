//! The distributor: arc-length positions for every swatch.
//!
//! The anchor keeps its own arc length. The remaining `count - 1` swatches
//! are split between the dark side (before the anchor) and the light side
//! (after it), then spread over each side according to the [`Spacing`]
//! policy.

use tracing::debug;

use crate::request::DistributionRequest;

/// Contrast warps.
mod warp;

pub use warp::Warp;

/// Distribution policy. The variants are mutually exclusive: smart spacing
/// never applies a contrast warp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
    /// Split swatches in proportion to the anchor's arc-length position and
    /// spread them linearly.
    Smart,
    /// Keep the anchor centered in the list, spreading each side with a warp.
    Balanced(Warp),
}

impl Spacing {
    /// The policy a request asks for.
    pub fn from_request(request: &DistributionRequest) -> Self {
        if request.smart_spacing {
            Self::Smart
        } else {
            Self::Balanced(Warp::from_contrast(request.contrast))
        }
    }

    /// The warp applied within each side.
    pub fn warp(self) -> Warp {
        match self {
            Self::Smart => Warp::Linear,
            Self::Balanced(warp) => warp,
        }
    }
}

/// Number of swatches placed before and after the anchor.
///
/// With [`Spacing::Smart`] the dark side gets `round(anchor * (count - 1))`
/// swatches; if that empties one side while the other holds more than one,
/// a swatch moves over. Otherwise odd counts split evenly and the larger half
/// of an even count goes to the longer side of the curve (the light side
/// when the anchor sits exactly in the middle).
pub fn split_points(spacing: Spacing, count: usize, anchor_arc_length: f64) -> (usize, usize) {
    let total = count.saturating_sub(1);
    match spacing {
        Spacing::Smart => {
            let mut before = ((anchor_arc_length * total as f64).round() as usize).min(total);
            let mut after = total - before;
            if before == 0 && after > 1 {
                before += 1;
                after -= 1;
            } else if after == 0 && before > 1 {
                after += 1;
                before -= 1;
            }
            (before, after)
        }
        Spacing::Balanced(_) => {
            let small = total / 2;
            let large = total - small;
            if anchor_arc_length > 1.0 - anchor_arc_length {
                (large, small)
            } else {
                (small, large)
            }
        }
    }
}

/// Swatch positions along a curve, in ascending arc length.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    /// Normalized arc length of every swatch, anchor included.
    pub arc_lengths: Vec<f64>,
    /// Index of the anchor within `arc_lengths`.
    pub anchor_index: usize,
}

impl Distribution {
    /// Swatches on the dark side of the anchor.
    pub fn before(&self) -> usize {
        self.anchor_index
    }

    /// Swatches on the light side of the anchor.
    pub fn after(&self) -> usize {
        self.arc_lengths.len() - self.anchor_index - 1
    }
}

/// Lay out `request.count` swatches around an anchor at `anchor_arc_length`.
pub fn distribute(request: &DistributionRequest, anchor_arc_length: f64) -> Distribution {
    let spacing = Spacing::from_request(request);
    let (before, after) = split_points(spacing, request.count, anchor_arc_length);
    let warp = spacing.warp();
    debug!(
        ?spacing,
        before, after, anchor = anchor_arc_length, "distributing swatches"
    );

    let mut arc_lengths = Vec::with_capacity(before + after + 1);
    for i in 0..before {
        let distance = (before - i) as f64 / (before + 1) as f64;
        arc_lengths.push(anchor_arc_length - anchor_arc_length * warp.apply(distance));
    }
    arc_lengths.push(anchor_arc_length);
    for i in 0..after {
        let distance = (i + 1) as f64 / (after + 1) as f64;
        arc_lengths.push(anchor_arc_length + (1.0 - anchor_arc_length) * warp.apply(distance));
    }

    Distribution {
        arc_lengths,
        anchor_index: before,
    }
}

/// Normalized arc lengths of all swatches, ascending, anchor included.
pub fn swatch_arc_lengths(request: &DistributionRequest, anchor_arc_length: f64) -> Vec<f64> {
    distribute(request, anchor_arc_length).arc_lengths
}
