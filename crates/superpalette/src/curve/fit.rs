//! Fitting a superellipse exponent through an anchor point.

use tracing::{debug, trace};

use crate::config::EngineConfig;

/// Coordinates at or below this collapse onto an axis.
const AXIS_THRESHOLD: f64 = 0.001;
/// Anchors with both coordinates at or above this sit in the square corner.
const CORNER_THRESHOLD: f64 = 0.99;

/// Residual of the superellipse equation `x^n + y^n = 1` at exponent `n`.
fn residual(x: f64, y: f64, n: f64) -> f64 {
    x.powf(n) + y.powf(n) - 1.0
}

/// Find the exponent `n` whose quarter superellipse passes closest to `(x, y)`.
///
/// The search is a bounded bisection over
/// `[config.exponent_min, config.exponent_max]`. Anchors hugging an axis
/// return the lower bound, anchors in the top-right corner return the upper
/// bound. The result never exceeds the upper bound.
pub fn find_exponent(x: f64, y: f64, config: &EngineConfig) -> f64 {
    if x <= AXIS_THRESHOLD || y <= AXIS_THRESHOLD {
        debug!(x, y, n = config.exponent_min, "anchor on axis, using minimum exponent");
        return config.exponent_min;
    }
    if x >= CORNER_THRESHOLD && y >= CORNER_THRESHOLD {
        debug!(x, y, n = config.exponent_max, "anchor in corner, using maximum exponent");
        return config.exponent_max;
    }

    let mut lo = config.exponent_min;
    let mut hi = config.exponent_max;
    let mut mid = (lo + hi) / 2.0;

    for step in 0..config.max_iterations {
        mid = (lo + hi) / 2.0;
        let f_mid = residual(x, y, mid);
        trace!(step, lo, hi, mid, f_mid, "bisection step");

        if f_mid.abs() < config.tolerance {
            debug!(x, y, n = mid, steps = step + 1, "exponent converged");
            return mid.min(config.exponent_max);
        }

        if f_mid.signum() == residual(x, y, lo).signum() {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    debug!(x, y, n = mid, "exponent search exhausted iterations");
    mid.min(config.exponent_max)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;

    fn fit(x: f64, y: f64) -> f64 {
        find_exponent(x, y, &EngineConfig::default())
    }

    #[test]
    fn diamond_and_circle() {
        // x + y = 1 is the n = 1 diamond.
        let n = fit(0.5, 0.5);
        assert!((n - 1.0).abs() < 0.01, "expected ~1, got {n}");

        // A point on the unit circle fits n = 2.
        let n = fit(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        assert!((n - 2.0).abs() < 0.01, "expected ~2, got {n}");
    }

    #[test]
    fn residual_within_tolerance() {
        for &(x, y) in &[(0.81, 0.78), (0.2, 0.9), (0.95, 0.1), (0.3, 0.3)] {
            let n = fit(x, y);
            assert!(residual(x, y, n).abs() < 0.001, "({x}, {y}) -> {n}");
        }
    }

    #[test]
    fn degenerate_anchors() {
        assert_eq!(fit(0.0, 0.5), 0.1);
        assert_eq!(fit(0.5, 0.0005), 0.1);
        assert_eq!(fit(0.995, 0.999), 25.0);
        assert_eq!(fit(1.0, 1.0), 25.0);
    }

    #[test]
    fn honours_configured_bounds() {
        let config = EngineConfig {
            exponent_min: 0.5,
            exponent_max: 8.0,
            ..EngineConfig::default()
        };
        assert_eq!(find_exponent(0.0, 0.3, &config), 0.5);
        assert_eq!(find_exponent(1.0, 1.0, &config), 8.0);
        // Unreachable anchor: the bracket collapses onto the upper bound.
        let n = find_exponent(0.98, 0.97, &config);
        assert!(n <= 8.0);
        assert!(n > 7.9);
    }
}
