//! Point lookup on sampled curves, by distance and by arc length.

use tracing::trace;

use super::DEGENERATE_SEGMENT;
use crate::point::CurvePoint;

/// Samples on either side of the coarse hit that are refined per segment.
const REFINE_WINDOW: usize = 3;

/// Project `(x, y)` onto the segment `a..b`.
///
/// Returns the interpolated point, or `None` for degenerate segments.
fn project_onto_segment(a: &CurvePoint, b: &CurvePoint, x: f64, y: f64) -> Option<CurvePoint> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq.sqrt() < DEGENERATE_SEGMENT {
        return None;
    }
    let f = (((x - a.x) * dx + (y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    Some(a.lerp(b, f))
}

/// Closest point on the polyline through `points` to `(x, y)`.
///
/// A linear scan picks the nearest sample (lowest index wins ties), then the
/// segments within [`REFINE_WINDOW`] samples of it are searched for a closer
/// projection. Returns `None` only for an empty slice.
pub fn closest(points: &[CurvePoint], x: f64, y: f64) -> Option<CurvePoint> {
    let mut best_index = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance_squared_to(x, y);
        if d < best_dist {
            best_index = i;
            best_dist = d;
        }
    }
    let mut best = *points.get(best_index)?;

    let lo = best_index.saturating_sub(REFINE_WINDOW);
    let hi = (best_index + REFINE_WINDOW).min(points.len() - 1);
    for pair in points[lo..=hi].windows(2) {
        let Some(candidate) = project_onto_segment(&pair[0], &pair[1], x, y) else {
            continue;
        };
        let d = candidate.distance_squared_to(x, y);
        if d < best_dist {
            best_dist = d;
            best = candidate;
        }
    }

    trace!(
        x,
        y,
        sample = best_index,
        arc = best.normalized_arc_length,
        "closest point"
    );
    Some(best)
}

/// Point at normalized arc length `s` on the polyline through `points`.
///
/// Queries at or beyond the ends clamp to the first and last samples.
/// Interior queries interpolate between the bracketing samples and carry `s`
/// as the result's normalized arc length. Returns `None` only for an empty
/// slice.
pub fn at_arc_length(points: &[CurvePoint], s: f64) -> Option<CurvePoint> {
    let first = points.first()?;
    let last = points.last()?;
    if s <= 0.0 {
        return Some(*first);
    }
    if s >= 1.0 {
        return Some(*last);
    }

    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.normalized_arc_length <= s && s <= b.normalized_arc_length {
            let span = b.normalized_arc_length - a.normalized_arc_length;
            let f = if span > 0.0 {
                (s - a.normalized_arc_length) / span
            } else {
                0.0
            };
            return Some(CurvePoint {
                normalized_arc_length: s,
                ..a.lerp(b, f)
            });
        }
    }

    Some(*last)
}
