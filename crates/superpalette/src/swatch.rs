//! Swatch descriptors and palette assembly.

use crate::{curve::CurveSample, distribute::Distribution};

/// Coordinates of the fixed black swatch.
const BLACK: UnitPoint = UnitPoint { x: 0.0, y: 0.0 };
/// Coordinates of the fixed white swatch.
const WHITE: UnitPoint = UnitPoint { x: 0.0, y: 1.0 };

/// A point in the saturation/value unit square.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPoint {
    /// Saturation in `[0, 1]`.
    pub x: f64,
    /// Value in `[0, 1]`.
    pub y: f64,
}

impl UnitPoint {
    /// `(hue, saturation%, value%)` for handing to a colorspace conversion.
    pub fn hsv(&self, hue: f64) -> (f64, f64, f64) {
        (hue, self.x * 100.0, self.y * 100.0)
    }
}

/// What a swatch represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SwatchKind {
    /// A regular swatch resolved on the curves.
    Curve,
    /// The swatch sitting at the anchor.
    Anchor,
    /// Fixed pure black, arc length 0.
    Black,
    /// Fixed pure white, arc length 1.
    White,
}

/// Where a swatch sits in the palette.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwatchPosition {
    /// Index in the final, dark-to-light palette.
    pub index: usize,
    /// Normalized arc length on the curves.
    pub normalized_arc_length: f64,
    /// Role of the swatch.
    pub kind: SwatchKind,
    /// Design-system step number; `None` for black and white.
    pub step: Option<u32>,
}

impl SwatchPosition {
    /// Whether this is the anchor swatch.
    pub fn is_anchor(&self) -> bool {
        self.kind == SwatchKind::Anchor
    }

    /// Whether this is the fixed black swatch.
    pub fn is_black(&self) -> bool {
        self.kind == SwatchKind::Black
    }

    /// Whether this is the fixed white swatch.
    pub fn is_white(&self) -> bool {
        self.kind == SwatchKind::White
    }
}

/// One palette entry: a position plus its point on each curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    /// Placement in the palette.
    pub position: SwatchPosition,
    /// Point on the main curve.
    pub main: UnitPoint,
    /// Point on the desaturated curve at the same arc length.
    pub muted: UnitPoint,
}

impl Swatch {
    /// Resolve a swatch at arc length `s` on both curves.
    pub fn on_curves(s: f64, kind: SwatchKind, main: &CurveSample, muted: &CurveSample) -> Self {
        let on_main = main.point_at_arc_length(s);
        let on_muted = muted.point_at_arc_length(s);
        Self {
            position: SwatchPosition {
                index: 0,
                normalized_arc_length: s,
                kind,
                step: None,
            },
            main: UnitPoint {
                x: on_main.x,
                y: on_main.y,
            },
            muted: UnitPoint {
                x: on_muted.x,
                y: on_muted.y,
            },
        }
    }

    /// A fixed endpoint swatch that bypasses curve lookup.
    fn fixed(kind: SwatchKind, s: f64, at: UnitPoint) -> Self {
        Self {
            position: SwatchPosition {
                index: 0,
                normalized_arc_length: s,
                kind,
                step: None,
            },
            main: at,
            muted: at,
        }
    }

    /// Display label: the step number, or `black`/`white`.
    pub fn label(&self) -> String {
        match (self.position.kind, self.position.step) {
            (SwatchKind::Black, _) => "black".to_string(),
            (SwatchKind::White, _) => "white".to_string(),
            (_, Some(step)) => step.to_string(),
            (_, None) => String::new(),
        }
    }
}

/// Step number for the main swatch `position_from_dark_end` places from the
/// dark end of a run of `total_main` swatches. The darkest swatch gets the
/// highest number, the lightest gets 10.
pub fn step_label(total_main: usize, position_from_dark_end: usize) -> u32 {
    (total_main.saturating_sub(position_from_dark_end) * 10) as u32
}

/// Concatenate the dark side, anchor and light side into the final palette.
///
/// With `include_black_white`, a fixed black swatch is prepended and a fixed
/// white swatch appended. Indices and step numbers are assigned here.
pub fn assemble(
    before: Vec<Swatch>,
    anchor: Swatch,
    after: Vec<Swatch>,
    include_black_white: bool,
) -> Vec<Swatch> {
    let total_main = before.len() + 1 + after.len();
    let mut main = before;
    main.push(anchor);
    main.extend(after);
    for (position, swatch) in main.iter_mut().enumerate() {
        swatch.position.step = Some(step_label(total_main, position));
    }

    let mut swatches = Vec::with_capacity(total_main + 2);
    if include_black_white {
        swatches.push(Swatch::fixed(SwatchKind::Black, 0.0, BLACK));
    }
    swatches.extend(main);
    if include_black_white {
        swatches.push(Swatch::fixed(SwatchKind::White, 1.0, WHITE));
    }

    for (index, swatch) in swatches.iter_mut().enumerate() {
        swatch.position.index = index;
    }
    swatches
}

/// Resolve every position of `distribution` on both curves and assemble.
pub fn resolve(
    distribution: &Distribution,
    main: &CurveSample,
    muted: &CurveSample,
    include_black_white: bool,
) -> Vec<Swatch> {
    let at = |s: f64, kind| Swatch::on_curves(s, kind, main, muted);
    let (before, rest) = distribution
        .arc_lengths
        .split_at(distribution.anchor_index.min(distribution.arc_lengths.len()));
    let Some((&anchor, after)) = rest.split_first() else {
        return assemble(Vec::new(), at(0.0, SwatchKind::Anchor), Vec::new(), include_black_white);
    };

    assemble(
        before.iter().map(|&s| at(s, SwatchKind::Curve)).collect(),
        at(anchor, SwatchKind::Anchor),
        after.iter().map(|&s| at(s, SwatchKind::Curve)).collect(),
        include_black_white,
    )
}
