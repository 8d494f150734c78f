//! Swatch-strip rendering used by the CLI.
//!
//! A strip has one row per curve: main swatches on top, their muted
//! counterparts beneath, ordered dark to light from left to right.

use image::{Rgba, RgbaImage};
use superpalette::{Palette, swatch::UnitPoint};

use crate::color::Hsv;

/// Layout options for a swatch strip.
#[derive(Clone, Copy, Debug)]
pub struct StripOptions {
    /// Side length of each swatch in pixels.
    pub swatch_size: u32,
    /// Gap between swatches and around the border in pixels.
    pub gap: u32,
    /// Background color showing through the gaps.
    pub background: Rgba<u8>,
}

/// Resolve a unit-square point into an opaque pixel color.
fn pixel(point: UnitPoint, hue: f64) -> Rgba<u8> {
    let [r, g, b] = Hsv::from_percent(point.hsv(hue)).to_rgb().0;
    Rgba([r, g, b, 0xff])
}

/// Fill the `size×size` square whose top-left corner is `(x0, y0)`.
fn fill_square(img: &mut RgbaImage, x0: u32, y0: u32, size: u32, col: Rgba<u8>) {
    for y in y0..(y0 + size).min(img.height()) {
        for x in x0..(x0 + size).min(img.width()) {
            img.put_pixel(x, y, col);
        }
    }
}

/// Render `palette` as a two-row strip in `hue`.
pub fn render_strip(palette: &Palette, hue: f64, options: StripOptions) -> RgbaImage {
    let StripOptions {
        swatch_size,
        gap,
        background,
    } = options;
    let columns = palette.swatches.len() as u32;
    let width = gap + columns * (swatch_size + gap);
    let height = gap + 2 * (swatch_size + gap);

    let mut img = RgbaImage::from_pixel(width, height, background);
    for (col, swatch) in palette.swatches.iter().enumerate() {
        let x = gap + col as u32 * (swatch_size + gap);
        fill_square(&mut img, x, gap, swatch_size, pixel(swatch.main, hue));
        fill_square(
            &mut img,
            x,
            2 * gap + swatch_size,
            swatch_size,
            pixel(swatch.muted, hue),
        );
    }
    img
}

#[cfg(test)]
mod tests {
    use superpalette::{DistributionRequest, EngineConfig, generate};

    use super::*;

    #[test]
    fn strip_dimensions_and_endpoints() {
        let request = DistributionRequest::new(0.8, 0.7)
            .with_count(4)
            .with_black_white(true);
        let palette = generate(&request, &EngineConfig::default()).unwrap();
        let options = StripOptions {
            swatch_size: 10,
            gap: 2,
            background: Rgba([1, 2, 3, 0xff]),
        };
        let img = render_strip(&palette, 30.0, options);
        assert_eq!(img.width(), 2 + 6 * 12);
        assert_eq!(img.height(), 2 + 2 * 12);

        // Corner gap shows background; first swatch is black, last is white.
        assert_eq!(*img.get_pixel(0, 0), Rgba([1, 2, 3, 0xff]));
        assert_eq!(*img.get_pixel(5, 5), Rgba([0, 0, 0, 0xff]));
        let last_x = 2 + 5 * 12 + 5;
        assert_eq!(*img.get_pixel(last_x, 5), Rgba([0xff, 0xff, 0xff, 0xff]));
        assert_eq!(*img.get_pixel(last_x, 20), Rgba([0xff, 0xff, 0xff, 0xff]));
    }
}
