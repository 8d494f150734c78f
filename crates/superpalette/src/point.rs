//! Samples on an arc-length parameterized curve.

/// A single sample on a sampled curve.
///
/// Coordinates live in the unit square: `x` is saturation and `y` is value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Parameter angle in `[0, π/2]`.
    pub t: f64,
    /// Horizontal (saturation) coordinate.
    pub x: f64,
    /// Vertical (value) coordinate.
    pub y: f64,
    /// Cumulative arc length from the first sample.
    pub arc_length: f64,
    /// Arc length divided by the total curve length.
    pub normalized_arc_length: f64,
}

impl CurvePoint {
    /// Squared Euclidean distance from this point to `(x, y)`.
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared_to(other.x, other.y).sqrt()
    }

    /// Linear interpolation between `self` and `other` at fraction `f`.
    ///
    /// Every field is interpolated, including both arc-length measures.
    pub fn lerp(&self, other: &Self, f: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * f;
        Self {
            t: mix(self.t, other.t),
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            arc_length: mix(self.arc_length, other.arc_length),
            normalized_arc_length: mix(self.normalized_arc_length, other.normalized_arc_length),
        }
    }

    /// The `(x, y)` coordinate pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
