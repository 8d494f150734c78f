//! The curve engine: quarter superellipses sampled by arc length.
//!
//! A curve is the quarter of `x^n + y^n = 1` inside the unit square, traced
//! from `(1, 0)` at `t = 0` to `(0, 1)` at `t = π/2`. Along it, saturation
//! falls while value rises, so normalized arc length `0` is the dark end and
//! `1` is the light end.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace};

use crate::point::CurvePoint;

/// Fitting an exponent through an anchor.
mod fit;
/// Nearest-point and arc-length lookups.
mod lookup;

pub use fit::find_exponent;

/// Segments shorter than this contribute no arc length.
const DEGENERATE_SEGMENT: f64 = 1e-10;
/// Smallest horizontal extent of a desaturated curve.
const MIN_COMPRESSION: f64 = 0.005;

/// Coordinates of the (horizontally scaled) superellipse at angle `t`.
///
/// `power` is `2 / n`. Returns `None` when the math produces a non-finite
/// value; otherwise both coordinates are clamped into `[0, 1]`.
fn superellipse_coords(t: f64, power: f64, x_scale: f64) -> Option<(f64, f64)> {
    let x = x_scale * t.cos().powf(power);
    let y = t.sin().powf(power);
    if x.is_finite() && y.is_finite() {
        Some((x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// An ordered, non-empty run of samples along one curve.
///
/// Normalized arc length is non-decreasing, starts at exactly `0` and (for
/// curves with more than one sample) ends at exactly `1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurveSample {
    /// Exponent of the sampled superellipse.
    exponent: f64,
    /// Horizontal extent of the curve (1 for the main curve).
    x_scale: f64,
    /// Total unnormalized arc length.
    total_arc_length: f64,
    /// The samples, in order of increasing `t`.
    points: Vec<CurvePoint>,
}

impl CurveSample {
    /// Sample the main curve `x = cos(t)^(2/n)`, `y = sin(t)^(2/n)`.
    pub fn superellipse(n: f64, resolution: usize) -> Self {
        Self::sample(n, 1.0, resolution)
    }

    /// Sample the desaturated companion of the curve with exponent `n_main`.
    ///
    /// The curve is squeezed horizontally to `saturation_percent / 100` of
    /// the square (never below 0.5%), and its exponent relaxes toward 1 as
    /// the percentage drops: `1 + (n_main - 1) * saturation_percent / 100`.
    pub fn desaturated(n_main: f64, saturation_percent: f64, resolution: usize) -> Self {
        let fraction = saturation_percent / 100.0;
        let x_scale = fraction.max(MIN_COMPRESSION);
        let n_secondary = 1.0 + (n_main - 1.0) * fraction;
        debug!(n_main, n_secondary, x_scale, "sampling desaturated curve");
        Self::sample(n_secondary, x_scale, resolution)
    }

    /// Sample `resolution` equal steps of `t` over `[0, π/2]`.
    fn sample(n: f64, x_scale: f64, resolution: usize) -> Self {
        let resolution = resolution.max(1);
        let power = 2.0 / n;
        let mut points = Vec::with_capacity(resolution + 1);
        let mut arc_length = 0.0;
        let mut previous: Option<(f64, f64)> = None;

        for i in 0..=resolution {
            let t = FRAC_PI_2 * i as f64 / resolution as f64;
            let Some((x, y)) = superellipse_coords(t, power, x_scale) else {
                trace!(n, t, "skipping non-finite sample");
                continue;
            };
            if let Some((px, py)) = previous {
                let segment = (x - px).hypot(y - py);
                if segment > DEGENERATE_SEGMENT {
                    arc_length += segment;
                }
            }
            previous = Some((x, y));
            points.push(CurvePoint {
                t,
                x,
                y,
                arc_length,
                normalized_arc_length: 0.0,
            });
        }

        if points.is_empty() {
            points.push(CurvePoint {
                t: 0.0,
                x: x_scale.clamp(0.0, 1.0),
                y: 0.0,
                arc_length: 0.0,
                normalized_arc_length: 0.0,
            });
        }
        normalize(&mut points, arc_length);

        Self {
            exponent: n,
            x_scale,
            total_arc_length: arc_length,
            points,
        }
    }

    /// Exponent of the sampled superellipse.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Horizontal extent of the curve.
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    /// Total unnormalized arc length.
    pub fn total_arc_length(&self) -> f64 {
        self.total_arc_length
    }

    /// All samples in order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The dark-end sample.
    pub fn first(&self) -> &CurvePoint {
        &self.points[0]
    }

    /// The light-end sample.
    pub fn last(&self) -> &CurvePoint {
        &self.points[self.points.len() - 1]
    }

    /// The point on the curve closest to `(x, y)`, with sub-segment precision.
    pub fn closest_point(&self, x: f64, y: f64) -> CurvePoint {
        lookup::closest(&self.points, x, y).unwrap_or(*self.first())
    }

    /// The point at normalized arc length `s`, clamped to the curve ends.
    pub fn point_at_arc_length(&self, s: f64) -> CurvePoint {
        lookup::at_arc_length(&self.points, s).unwrap_or(*self.last())
    }
}

/// Fill in normalized arc length from cumulative arc length.
///
/// A zero-length curve falls back to spacing by sample index.
fn normalize(points: &mut [CurvePoint], total: f64) {
    let last = points.len().saturating_sub(1);
    if total > 0.0 {
        for p in points.iter_mut() {
            p.normalized_arc_length = p.arc_length / total;
        }
    } else {
        for (i, p) in points.iter_mut().enumerate() {
            p.normalized_arc_length = if last == 0 {
                0.0
            } else {
                i as f64 / last as f64
            };
        }
    }

    if let Some(p) = points.first_mut() {
        p.normalized_arc_length = 0.0;
    }
    if last > 0 {
        points[last].normalized_arc_length = 1.0;
    }
}
