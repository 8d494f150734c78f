//! Property-based tests for the curve engine and distributor.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use proptest::prelude::*;
use superpalette::{
    CurveSample, DistributionRequest, EngineConfig, distribute::swatch_arc_lengths, find_exponent,
    generate,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The fitted exponent puts the anchor on its curve.
    #[test]
    fn exponent_passes_through_anchor(x in 0.05f64..0.95, y in 0.05f64..0.95) {
        let n = find_exponent(x, y, &EngineConfig::default());
        prop_assert!((0.1..=25.0).contains(&n));
        let residual = x.powf(n) + y.powf(n) - 1.0;
        prop_assert!(residual.abs() < 0.01, "({x}, {y}) -> n={n}, residual={residual}");
    }

    /// Every sampled curve spans normalized arc length 0 to 1, in order.
    #[test]
    fn curves_span_unit_arc_length(n in 0.1f64..=25.0) {
        let curve = CurveSample::superellipse(n, 400);
        prop_assert_eq!(curve.first().normalized_arc_length, 0.0);
        prop_assert_eq!(curve.last().normalized_arc_length, 1.0);
        for pair in curve.points().windows(2) {
            prop_assert!(pair[0].normalized_arc_length <= pair[1].normalized_arc_length);
        }
        prop_assert_eq!(curve.point_at_arc_length(0.0), *curve.first());
        prop_assert_eq!(curve.point_at_arc_length(1.0), *curve.last());
    }

    /// Desaturated curves keep the same normalization guarantees.
    #[test]
    fn desaturated_curves_span_unit_arc_length(n in 0.1f64..=25.0, pct in 0.0f64..=100.0) {
        let curve = CurveSample::desaturated(n, pct, 400);
        prop_assert_eq!(curve.first().normalized_arc_length, 0.0);
        prop_assert_eq!(curve.last().normalized_arc_length, 1.0);
        let extent = (pct / 100.0).max(0.005);
        for p in curve.points() {
            prop_assert!(p.x <= extent + 1e-12);
        }
    }

    /// Looking up the arc length of a projection lands back on the projection.
    #[test]
    fn projection_round_trips(n in 0.5f64..8.0, t in 0.05f64..1.5, dx in -0.02f64..0.02, dy in -0.02f64..0.02) {
        let curve = CurveSample::superellipse(n, 400);
        let x = t.cos().powf(2.0 / n) + dx;
        let y = t.sin().powf(2.0 / n) + dy;
        let hit = curve.closest_point(x, y);
        let back = curve.point_at_arc_length(hit.normalized_arc_length);
        prop_assert!((back.x - hit.x).abs() < 1e-6, "{back:?} vs {hit:?}");
        prop_assert!((back.y - hit.y).abs() < 1e-6, "{back:?} vs {hit:?}");
    }

    /// The distributor always yields `count` ascending positions with exactly
    /// one at the anchor.
    #[test]
    fn distribution_count_invariant(
        count in 1usize..=50,
        anchor in 0.01f64..0.99,
        contrast in 0.1f64..=5.0,
        smart in any::<bool>(),
    ) {
        let request = DistributionRequest::new(0.5, 0.5)
            .with_count(count)
            .with_contrast(contrast)
            .with_smart_spacing(smart);
        let arcs = swatch_arc_lengths(&request, anchor);
        prop_assert_eq!(arcs.len(), count);
        prop_assert_eq!(arcs.iter().filter(|&&s| s == anchor).count(), 1);
        for pair in arcs.windows(2) {
            prop_assert!(pair[0] < pair[1], "{arcs:?}");
        }
        prop_assert!(arcs[0] > 0.0 && arcs[count - 1] < 1.0);
    }

    /// Smart spacing always leaves the request with linear contrast.
    #[test]
    fn smart_spacing_forces_linear_contrast(contrast in 0.1f64..=5.0) {
        let request = DistributionRequest::default()
            .with_contrast(contrast)
            .with_smart_spacing(true);
        prop_assert_eq!(request.contrast, 1.0);
        prop_assert!(request.validate(&EngineConfig::default()).is_ok());
    }

    /// End-to-end generation produces a dark-to-light palette.
    #[test]
    fn palettes_run_dark_to_light(
        x in 0.02f64..0.98,
        y in 0.02f64..0.98,
        count in 1usize..=50,
        black_white in any::<bool>(),
    ) {
        let request = DistributionRequest::new(x, y)
            .with_count(count)
            .with_black_white(black_white);
        let palette = generate(&request, &EngineConfig::default()).expect("valid request");
        let extra = if black_white { 2 } else { 0 };
        prop_assert_eq!(palette.swatches.len(), count + extra);
        prop_assert_eq!(palette.swatches.iter().filter(|s| s.position.is_anchor()).count(), 1);
        for pair in palette.swatches.windows(2) {
            prop_assert!(
                pair[0].position.normalized_arc_length <= pair[1].position.normalized_arc_length
            );
        }
    }
}
