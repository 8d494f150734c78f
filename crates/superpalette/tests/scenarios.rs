//! Integration tests covering end-to-end palette scenarios.
#[cfg(test)]
mod tests {
    use superpalette::{
        DistributionRequest, EngineConfig, Palette, distribute::swatch_arc_lengths, error,
        fit_and_distribute, generate,
    };

    fn assert_strictly_increasing(name: &str, palette: &Palette) {
        for pair in palette.swatches.windows(2) {
            let (a, b) = (
                pair[0].position.normalized_arc_length,
                pair[1].position.normalized_arc_length,
            );
            assert!(a < b, "{name}: arc lengths not increasing: {a} then {b}");
        }
    }

    fn assert_split(name: &str, palette: &Palette, before: usize, after: usize) {
        let anchor = palette
            .swatches
            .iter()
            .position(|s| s.position.is_anchor())
            .expect("anchor present");
        let curve = palette.curve_swatches().count();
        assert_eq!(
            (anchor, curve - anchor - 1),
            (before, after),
            "{name}: unexpected split"
        );
    }

    macro_rules! split_tests {
        ($(($name:ident, $x:expr, $y:expr, $count:expr, $contrast:expr, $smart:expr, $before:expr, $after:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<split_ $name>]() -> error::Result<()> {
                        let palette = fit_and_distribute($x, $y, $count, $contrast, $smart, 20.0)?;
                        assert_eq!(palette.swatches.len(), $count);
                        assert_split(stringify!($name), &palette, $before, $after);
                        assert_strictly_increasing(stringify!($name), &palette);
                        Ok(())
                    }
                }
            )*
        };
    }

    split_tests! {
        (odd_count_balanced, 0.6, 0.6, 11, 1.0, false, 5, 5),
        (odd_count_high_contrast, 0.6, 0.6, 11, 4.0, false, 5, 5),
        (odd_count_low_contrast, 0.6, 0.6, 7, 0.3, false, 3, 3),
        (single_linear, 0.4, 0.7, 1, 1.0, false, 0, 0),
        (single_smart, 0.4, 0.7, 1, 1.0, true, 0, 0),
        (single_contrast, 0.4, 0.7, 1, 3.0, false, 0, 0),
        (two_swatches_dark_anchor, 0.9, 0.3, 2, 1.0, false, 0, 1),
        (two_swatches_light_anchor, 0.3, 0.9, 2, 1.0, false, 1, 0),
    }

    #[test]
    fn reference_anchor_even_count() -> error::Result<()> {
        // Saturation 81%, value 78%.
        let palette = fit_and_distribute(0.81, 0.78, 10, 1.0, false, 20.0)?;
        assert_eq!(palette.swatches.len(), 10);
        assert_strictly_increasing("reference", &palette);

        let anchor = palette.anchor_swatch().expect("anchor");
        let before = anchor.position.index;
        let after = 9 - before;
        assert!(
            (before, after) == (4, 5) || (before, after) == (5, 4),
            "unexpected split {before}/{after}"
        );
        // The larger half sits on the longer side of the curve.
        let s = palette.anchor.normalized_arc_length;
        assert_eq!(before > after, s > 1.0 - s);

        let first = palette.swatches[0].position.normalized_arc_length;
        let last = palette.swatches[9].position.normalized_arc_length;
        assert!(first > 0.0);
        assert!(last < 1.0);
        Ok(())
    }

    #[test]
    fn black_and_white_endpoints() -> error::Result<()> {
        let request = DistributionRequest::new(0.81, 0.78)
            .with_count(10)
            .with_black_white(true);
        let palette = generate(&request, &EngineConfig::default())?;
        assert_eq!(palette.swatches.len(), 12);

        let black = &palette.swatches[0];
        assert!(black.position.is_black());
        assert_eq!(black.position.normalized_arc_length, 0.0);
        assert_eq!((black.main.x, black.main.y), (0.0, 0.0));

        let white = &palette.swatches[11];
        assert!(white.position.is_white());
        assert_eq!(white.position.normalized_arc_length, 1.0);
        assert_eq!((white.main.x, white.main.y), (0.0, 1.0));

        assert_eq!(palette.curve_swatches().count(), 10);
        Ok(())
    }

    #[test]
    fn max_contrast_pushes_density_to_the_extremes() -> error::Result<()> {
        let request = DistributionRequest::default()
            .with_count(11)
            .with_contrast(5.0);
        let arcs = swatch_arc_lengths(&request, 0.5);
        let gaps: Vec<f64> = arcs.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps[0] < gaps[4], "dark end should be denser: {gaps:?}");
        assert!(gaps[9] < gaps[5], "light end should be denser: {gaps:?}");
        Ok(())
    }

    #[test]
    fn smart_spacing_follows_anchor_position() -> error::Result<()> {
        // A bright, weakly saturated anchor sits far along the curve, so most
        // swatches land on the dark side.
        let palette = fit_and_distribute(0.2, 0.95, 11, 1.0, true, 20.0)?;
        let s = palette.anchor.normalized_arc_length;
        let anchor = palette.anchor_swatch().expect("anchor");
        let expected = (s * 10.0).round() as usize;
        assert_eq!(anchor.position.index, expected.clamp(1, 9));
        assert!(anchor.position.index > 5);
        Ok(())
    }

    #[test]
    fn muted_swatches_share_positions() -> error::Result<()> {
        let palette = fit_and_distribute(0.7, 0.6, 8, 1.0, false, 35.0)?;
        for swatch in &palette.swatches {
            let s = swatch.position.normalized_arc_length;
            let muted = palette.desaturated_curve.point_at_arc_length(s);
            assert_eq!((swatch.muted.x, swatch.muted.y), (muted.x, muted.y));
            assert!(swatch.muted.x <= 0.35 + 1e-12);
        }
        Ok(())
    }

    #[test]
    fn steps_descend_from_dark_to_light() -> error::Result<()> {
        let palette = fit_and_distribute(0.6, 0.5, 9, 1.0, false, 20.0)?;
        let labels: Vec<String> = palette.swatches.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["90", "80", "70", "60", "50", "40", "30", "20", "10"]
        );
        Ok(())
    }
}
