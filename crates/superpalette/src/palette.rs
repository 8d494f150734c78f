//! End-to-end palette generation.

use tracing::debug;

use crate::{
    config::EngineConfig,
    curve::{CurveSample, find_exponent},
    distribute::distribute,
    error::Result,
    point::CurvePoint,
    request::DistributionRequest,
    swatch::{Swatch, resolve},
};

/// Everything computed for one request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    /// Exponent fitted through the anchor.
    pub exponent: f64,
    /// The anchor projected onto the main curve.
    pub anchor: CurvePoint,
    /// The main curve.
    pub main_curve: CurveSample,
    /// The desaturated companion curve.
    pub desaturated_curve: CurveSample,
    /// Swatches ordered from dark to light.
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// The anchor swatch.
    pub fn anchor_swatch(&self) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.position.is_anchor())
    }

    /// Swatches that sit on the curves, excluding black and white.
    pub fn curve_swatches(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches
            .iter()
            .filter(|s| !(s.position.is_black() || s.position.is_white()))
    }
}

/// Validate `request` and compute its palette.
///
/// Validation is the only fallible step; the curve fit and distribution that
/// follow always produce a result.
pub fn generate(request: &DistributionRequest, config: &EngineConfig) -> Result<Palette> {
    config.validate()?;
    request.validate(config)?;

    let exponent = find_exponent(request.anchor_x, request.anchor_y, config);
    let main_curve = CurveSample::superellipse(exponent, config.resolution);
    let desaturated_curve =
        CurveSample::desaturated(exponent, request.desaturation, config.resolution);

    let anchor = main_curve.closest_point(request.anchor_x, request.anchor_y);
    let distribution = distribute(request, anchor.normalized_arc_length);
    let swatches = resolve(
        &distribution,
        &main_curve,
        &desaturated_curve,
        request.include_black_white,
    );
    debug!(
        exponent,
        anchor = anchor.normalized_arc_length,
        swatches = swatches.len(),
        "palette generated"
    );

    Ok(Palette {
        exponent,
        anchor,
        main_curve,
        desaturated_curve,
        swatches,
    })
}

/// Fit and distribute with the default configuration and no black/white
/// endpoints.
///
/// Enabling `smart_spacing` overrides `contrast` with 1.0.
pub fn fit_and_distribute(
    anchor_x: f64,
    anchor_y: f64,
    count: usize,
    contrast: f64,
    smart_spacing: bool,
    desaturation: f64,
) -> Result<Palette> {
    let request = DistributionRequest::new(anchor_x, anchor_y)
        .with_count(count)
        .with_contrast(contrast)
        .with_smart_spacing(smart_spacing)
        .with_desaturation(desaturation);
    generate(&request, &EngineConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn anchor_swatch_matches_projection() {
        let palette = fit_and_distribute(0.81, 0.78, 10, 1.0, false, 20.0).unwrap();
        let anchor = palette.anchor_swatch().unwrap();
        assert_eq!(
            anchor.position.normalized_arc_length,
            palette.anchor.normalized_arc_length
        );
        assert!((anchor.main.x - 0.81).abs() < 0.01);
        assert!((anchor.main.y - 0.78).abs() < 0.01);
        assert_eq!(palette.curve_swatches().count(), 10);
    }

    #[test]
    fn rejects_invalid_requests() {
        assert!(matches!(
            fit_and_distribute(0.5, 0.5, 0, 1.0, false, 20.0),
            Err(Error::CountOutOfRange { .. })
        ));
        assert!(matches!(
            fit_and_distribute(0.5, 0.5, 5, 9.0, false, 20.0),
            Err(Error::ContrastOutOfRange { .. })
        ));
    }

    #[test]
    fn smart_spacing_overrides_contrast() {
        let smart = fit_and_distribute(0.81, 0.78, 10, 2.0, true, 20.0).unwrap();
        let linear_smart = fit_and_distribute(0.81, 0.78, 10, 1.0, true, 20.0).unwrap();
        assert_eq!(smart, linear_smart);
    }

    #[test]
    fn hand_built_conflicting_request_is_rejected() {
        let mut request = DistributionRequest::new(0.81, 0.78).with_smart_spacing(true);
        request.contrast = 2.0;
        assert_eq!(
            generate(&request, &EngineConfig::default()),
            Err(Error::ConflictingSpacing(2.0))
        );
    }

    #[test]
    fn full_saturation_keeps_muted_swatches_on_main_curve() {
        let palette = fit_and_distribute(0.7, 0.6, 8, 1.0, false, 100.0).unwrap();
        for swatch in &palette.swatches {
            assert_eq!(swatch.main, swatch.muted);
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig {
            resolution: 0,
            ..EngineConfig::default()
        };
        let result = generate(&DistributionRequest::default(), &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
