//! Command‑line entry point for the `spal` tool.
//!
//! Generates superellipse palettes around an anchor color and prints them as
//! text or JSON, optionally rendering a PNG swatch strip.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::Level;

/// Colorspace conversion and color parsing.
mod color;
/// CLI command implementations.
mod cmd;
/// Swatch-strip rendering.
mod render;

use crate::{
    cmd::{Anchor, CurveOptions, Format, PaletteOptions},
    color::{Hsv, Rgb, parse_color},
};

/// Parse a percentage in `[0, 100]`.
fn parse_percent(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| format!("invalid percentage '{s}': expected a number"))?;
    if (0.0..=100.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("percentage {v} must be between 0 and 100"))
    }
}

/// Parse a hue in degrees, wrapping it into `[0, 360)`.
fn parse_hue(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid hue '{s}': expected degrees"))?;
    if v.is_finite() {
        Ok(v.rem_euclid(360.0))
    } else {
        Err(format!("invalid hue '{s}': must be finite"))
    }
}

/// How the anchor color is given on the command line.
#[derive(Args, Clone, Debug)]
struct AnchorArgs {
    /// Anchor color; its saturation and value place the anchor.
    #[arg(
        short = 'c',
        long = "color",
        value_parser = parse_color,
        conflicts_with_all = ["saturation", "value"],
        value_name = "COLOR",
        help = "Anchor color (name or hex; RGB/RRGGBB, '#' optional)"
    )]
    color: Option<Rgb>,

    /// Hue in degrees; overrides the hue of `--color`.
    #[arg(long = "hue", value_parser = parse_hue, help = "Hue in degrees")]
    hue: Option<f64>,

    /// Anchor saturation percentage.
    #[arg(
        short = 's',
        long = "saturation",
        value_parser = parse_percent,
        required_unless_present = "color",
        help = "Anchor saturation in percent"
    )]
    saturation: Option<f64>,

    /// Anchor value percentage.
    #[arg(
        short = 'b',
        long = "value",
        value_parser = parse_percent,
        required_unless_present = "color",
        help = "Anchor value (brightness) in percent"
    )]
    value: Option<f64>,
}

impl AnchorArgs {
    /// Resolve to hue plus unit-square coordinates.
    fn resolve(&self) -> Result<Anchor> {
        let (hue, x, y) = match (self.color, self.saturation, self.value) {
            (Some(rgb), _, _) => {
                let hsv = Hsv::from(rgb);
                (hsv.hue, hsv.saturation, hsv.value)
            }
            (None, Some(s), Some(v)) => (0.0, s / 100.0, v / 100.0),
            _ => bail!("an anchor needs --color or both --saturation and --value"),
        };
        Ok(Anchor {
            hue: self.hue.unwrap_or(hue),
            x,
            y,
        })
    }
}

#[derive(Parser)]
#[command(name = "spal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Optional JSON file overriding engine bounds.
    #[arg(long = "config", global = true, value_name = "PATH", help = "Engine config JSON file")]
    config: Option<PathBuf>,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `spal` tool.
enum Commands {
    #[command(about = "Generate a palette around an anchor color")]
    /// Generate a palette around an anchor color.
    Palette {
        /// Anchor color.
        #[command(flatten)]
        anchor: AnchorArgs,

        #[arg(short = 'n', long = "count", default_value_t = 10, help = "Number of curve swatches")]
        /// Number of curve swatches, anchor included.
        count: usize,

        #[arg(
            long = "contrast",
            default_value_t = 1.0,
            help = "Contrast factor (1.0 is linear)"
        )]
        /// Contrast factor.
        contrast: f64,

        #[arg(
            long = "smart",
            default_value_t = false,
            help = "Split swatches by the anchor's position (forces contrast 1.0)"
        )]
        /// Smart spacing toggle.
        smart: bool,

        #[arg(
            short = 'd',
            long = "desaturation",
            value_parser = parse_percent,
            default_value_t = 20.0,
            help = "Saturation percent kept by the muted row"
        )]
        /// Saturation percentage kept by the muted curve.
        desaturation: f64,

        #[arg(long = "black-white", default_value_t = false, help = "Add black and white ends")]
        /// Add black and white endpoints.
        black_white: bool,

        #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
        /// Output encoding.
        format: Format,

        #[arg(long = "png", value_name = "PATH", help = "Also render a swatch strip PNG")]
        /// Optional PNG output path.
        png: Option<PathBuf>,

        #[arg(
            long = "swatch-size",
            value_name = "PIXELS",
            default_value_t = 64,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Swatch size in the PNG strip"
        )]
        /// Swatch size for the PNG strip.
        swatch_size: u32,
    },

    #[command(about = "Dump the samples of the fitted curve")]
    /// Dump the samples of the fitted curve.
    Curve {
        /// Anchor color.
        #[command(flatten)]
        anchor: AnchorArgs,

        #[arg(long = "muted", default_value_t = false, help = "Dump the desaturated curve")]
        /// Dump the desaturated curve instead.
        muted: bool,

        #[arg(
            short = 'd',
            long = "desaturation",
            value_parser = parse_percent,
            default_value_t = 20.0,
            help = "Saturation percent kept by the muted curve"
        )]
        /// Saturation percentage kept by the muted curve.
        desaturation: f64,

        #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
        /// Output encoding.
        format: Format,
    },

    #[command(about = "Fit the superellipse exponent through an anchor")]
    /// Fit the exponent through an anchor.
    Fit {
        /// Anchor color.
        #[command(flatten)]
        anchor: AnchorArgs,

        #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
        /// Output encoding.
        format: Format,
    },

    #[command(about = "Print the default engine config as JSON")]
    /// Print the default engine config.
    Defaults,
}

/// Install the stderr log subscriber for the given `-v` count.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Print command output or exit with an error.
fn report(result: Result<String>) {
    match result {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Dispatch the parsed command.
fn run(command: Commands, config_path: Option<&Path>) -> Result<String> {
    let config = cmd::load_config(config_path)?;
    match command {
        Commands::Palette {
            anchor,
            count,
            contrast,
            smart,
            desaturation,
            black_white,
            format,
            png,
            swatch_size,
        } => cmd::palette(&PaletteOptions {
            anchor: anchor.resolve()?,
            count,
            contrast,
            smart,
            desaturation,
            black_white,
            format,
            png: png.as_deref(),
            swatch_size,
            config,
        }),
        Commands::Curve {
            anchor,
            muted,
            desaturation,
            format,
        } => cmd::curve(
            CurveOptions {
                anchor: anchor.resolve()?,
                muted,
                desaturation,
                format,
            },
            &config,
        ),
        Commands::Fit { anchor, format } => cmd::fit(anchor.resolve()?, &config, format),
        Commands::Defaults => cmd::defaults(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.v);
    report(run(cli.command, cli.config.as_deref()));
}
