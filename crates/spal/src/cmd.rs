//! Command handlers for the `spal` CLI.
//!
//! Each handler runs the palette engine and returns the text it wants
//! printed; `main` owns stdout.

use std::{
    fmt::{self, Write as _},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use superpalette::{
    CurveSample, DistributionRequest, EngineConfig, Palette, find_exponent, generate,
    point::CurvePoint,
    swatch::{SwatchKind, UnitPoint},
};
use tracing::{info, warn};

use crate::{
    color::Hsv,
    render::{StripOptions, render_strip},
};

/// Output encoding for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Human-readable table.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// The anchor color, resolved to hue plus unit-square coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation in `[0, 1]`.
    pub x: f64,
    /// Value in `[0, 1]`.
    pub y: f64,
}

/// Load engine bounds from a JSON file, or use the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config.validate()?;
    info!(path = %path.display(), "loaded engine config");
    Ok(config)
}

/// The default engine bounds as pretty JSON, ready to edit into a config file.
pub fn defaults() -> Result<String> {
    Ok(serde_json::to_string_pretty(&EngineConfig::default())? + "\n")
}

/// Parameters for the `palette` subcommand.
#[derive(Clone, Debug)]
pub struct PaletteOptions<'a> {
    /// Anchor color.
    pub anchor: Anchor,
    /// Number of curve swatches.
    pub count: usize,
    /// Contrast factor.
    pub contrast: f64,
    /// Smart spacing toggle.
    pub smart: bool,
    /// Saturation percentage kept by the muted row.
    pub desaturation: f64,
    /// Add black and white endpoints.
    pub black_white: bool,
    /// Output encoding.
    pub format: Format,
    /// Optional PNG strip destination.
    pub png: Option<&'a Path>,
    /// Swatch size for the PNG strip.
    pub swatch_size: u32,
    /// Engine bounds.
    pub config: EngineConfig,
}

/// A color as reported to the user.
#[derive(Debug, Serialize)]
struct ColorReport {
    /// Saturation in `[0, 1]`.
    x: f64,
    /// Value in `[0, 1]`.
    y: f64,
    /// `#rrggbb` form.
    hex: String,
}

impl ColorReport {
    /// Resolve `point` in `hue`.
    fn new(point: UnitPoint, hue: f64) -> Self {
        Self {
            x: point.x,
            y: point.y,
            hex: Hsv::from_percent(point.hsv(hue)).to_rgb().hex(),
        }
    }
}

/// One swatch as reported to the user.
#[derive(Debug, Serialize)]
struct SwatchReport {
    /// Step number or `black`/`white`.
    label: String,
    /// Role of the swatch.
    kind: SwatchKind,
    /// Normalized arc length.
    arc_length: f64,
    /// Main-curve color.
    main: ColorReport,
    /// Muted-curve color.
    muted: ColorReport,
}

/// A whole palette as reported to the user.
#[derive(Debug, Serialize)]
struct PaletteReport {
    /// Hue shared by every swatch.
    hue: f64,
    /// Fitted superellipse exponent.
    exponent: f64,
    /// Anchor position on the main curve.
    anchor_arc_length: f64,
    /// Swatches, dark to light.
    swatches: Vec<SwatchReport>,
}

impl PaletteReport {
    /// Build the report for `palette` in `hue`.
    fn new(palette: &Palette, hue: f64) -> Self {
        Self {
            hue,
            exponent: palette.exponent,
            anchor_arc_length: palette.anchor.normalized_arc_length,
            swatches: palette
                .swatches
                .iter()
                .map(|s| SwatchReport {
                    label: s.label(),
                    kind: s.position.kind,
                    arc_length: s.position.normalized_arc_length,
                    main: ColorReport::new(s.main, hue),
                    muted: ColorReport::new(s.muted, hue),
                })
                .collect(),
        }
    }

    /// Render as an aligned text table.
    fn to_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "hue {:.1}  exponent {:.4}  anchor arc {:.4}",
            self.hue, self.exponent, self.anchor_arc_length
        )?;
        writeln!(out, "{:>6}  {:>6}  {:>8}  {:>8}", "step", "arc", "main", "muted")?;
        for s in &self.swatches {
            let marker = if s.kind == SwatchKind::Anchor { "  *" } else { "" };
            writeln!(
                out,
                "{:>6}  {:>6.4}  {:>8}  {:>8}{marker}",
                s.label, s.arc_length, s.main.hex, s.muted.hex
            )?;
        }
        Ok(out)
    }
}

/// Encode a serializable value in the requested format.
fn encode<T: Serialize>(
    value: &T,
    format: Format,
    text: impl FnOnce(&T) -> Result<String, fmt::Error>,
) -> Result<String> {
    match format {
        Format::Text => Ok(text(value)?),
        Format::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
    }
}

/// Build the engine request for the `palette` subcommand.
fn palette_request(options: &PaletteOptions<'_>) -> DistributionRequest {
    if options.smart && options.contrast != 1.0 {
        warn!(
            contrast = options.contrast,
            "smart spacing enabled; contrast reset to 1.0"
        );
    }
    DistributionRequest::new(options.anchor.x, options.anchor.y)
        .with_count(options.count)
        .with_contrast(options.contrast)
        .with_smart_spacing(options.smart)
        .with_desaturation(options.desaturation)
        .with_black_white(options.black_white)
}

/// Generate a palette, optionally writing a PNG strip, and format it.
pub fn palette(options: &PaletteOptions<'_>) -> Result<String> {
    let request = palette_request(options);
    let palette = generate(&request, &options.config)?;
    info!(
        exponent = palette.exponent,
        swatches = palette.swatches.len(),
        "palette generated"
    );

    if let Some(path) = options.png {
        if options.swatch_size == 0 {
            bail!("swatch size must be >= 1");
        }
        let strip = render_strip(
            &palette,
            options.anchor.hue,
            StripOptions {
                swatch_size: options.swatch_size,
                gap: (options.swatch_size / 8).max(1),
                background: image::Rgba([0xff, 0xff, 0xff, 0xff]),
            },
        );
        strip
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote swatch strip");
    }

    let report = PaletteReport::new(&palette, options.anchor.hue);
    encode(&report, options.format, PaletteReport::to_text)
}

/// Exponent and anchor placement as reported by `fit`.
#[derive(Debug, Serialize)]
struct FitReport {
    /// Anchor saturation.
    x: f64,
    /// Anchor value.
    y: f64,
    /// Fitted exponent.
    exponent: f64,
    /// The anchor projected onto the fitted curve.
    projected: CurvePoint,
}

/// Fit an exponent through the anchor and report where it lands.
pub fn fit(anchor: Anchor, config: &EngineConfig, format: Format) -> Result<String> {
    config.validate()?;
    let exponent = find_exponent(anchor.x, anchor.y, config);
    let curve = CurveSample::superellipse(exponent, config.resolution);
    let report = FitReport {
        x: anchor.x,
        y: anchor.y,
        exponent,
        projected: curve.closest_point(anchor.x, anchor.y),
    };
    encode(&report, format, |r| {
        Ok(format!(
            "exponent {:.4}\nanchor arc {:.4}\nprojected ({:.4}, {:.4})\n",
            r.exponent, r.projected.normalized_arc_length, r.projected.x, r.projected.y
        ))
    })
}

/// Parameters for the `curve` subcommand.
#[derive(Clone, Copy, Debug)]
pub struct CurveOptions {
    /// Anchor the curve is fitted through.
    pub anchor: Anchor,
    /// Dump the desaturated curve instead of the main one.
    pub muted: bool,
    /// Saturation percentage kept by the muted curve.
    pub desaturation: f64,
    /// Output encoding.
    pub format: Format,
}

/// Dump the samples of the fitted (or muted) curve.
pub fn curve(options: CurveOptions, config: &EngineConfig) -> Result<String> {
    config.validate()?;
    if !(0.0..=100.0).contains(&options.desaturation) {
        bail!(
            "desaturation {} must be between 0 and 100",
            options.desaturation
        );
    }
    let exponent = find_exponent(options.anchor.x, options.anchor.y, config);
    let curve = if options.muted {
        CurveSample::desaturated(exponent, options.desaturation, config.resolution)
    } else {
        CurveSample::superellipse(exponent, config.resolution)
    };

    encode(&curve, options.format, |c| {
        let mut out = String::new();
        writeln!(
            out,
            "# exponent {:.4}  length {:.6}",
            c.exponent(),
            c.total_arc_length()
        )?;
        for p in c.points() {
            writeln!(
                out,
                "{:.6} {:.6} {:.6} {:.6}",
                p.t, p.x, p.y, p.normalized_arc_length
            )?;
        }
        Ok(out)
    })
}
