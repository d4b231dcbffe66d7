//! Canvas sizes and per-size layout constants.

use std::fmt;

use super::{font::font_size, split::LineSplit};

/// Output icon edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasSize {
    Small,
    Large,
}

impl CanvasSize {
    /// Sizes in generation order.
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    /// Edge length in pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::Small => 192,
            Self::Large => 512,
        }
    }

    /// File name without extension, e.g. `icon-192`.
    pub fn file_stem(self) -> String {
        format!("icon-{}", self.px())
    }

    /// Static layout table for this size.
    pub const fn params(self) -> &'static LayoutParams {
        match self {
            Self::Small => &SMALL,
            Self::Large => &LARGE,
        }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let px = self.px();
        write!(f, "{px}x{px}")
    }
}

/// Fixed positions and base sizes for one canvas size.
#[derive(Debug, PartialEq)]
pub struct LayoutParams {
    /// Share of the canvas width available to text.
    pub text_area_fraction: f64,
    pub base_font_line1: u32,
    pub base_font_line2: u32,
    /// Baselines when two lines are shown.
    pub line1_y: u32,
    pub line2_y: u32,
    /// Baseline when only line1 is shown.
    pub single_line_y: u32,
    pub glyph_size: u32,
    pub glyph_offset: u32,
    pub glyph_spacing: u32,
}

const SMALL: LayoutParams = LayoutParams {
    text_area_fraction: 0.90,
    base_font_line1: 50,
    base_font_line2: 38,
    line1_y: 88,
    line2_y: 128,
    single_line_y: 108,
    glyph_size: 28,
    glyph_offset: 20,
    glyph_spacing: 56,
};

const LARGE: LayoutParams = LayoutParams {
    text_area_fraction: 0.90,
    base_font_line1: 130,
    base_font_line2: 100,
    line1_y: 225,
    line2_y: 315,
    single_line_y: 275,
    glyph_size: 75,
    glyph_offset: 50,
    glyph_spacing: 150,
};

/// Text to render at a given canvas size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    pub text: String,
    pub size: CanvasSize,
}

impl IconRequest {
    pub fn new(text: impl Into<String>, size: CanvasSize) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }
}

/// Lines, font sizes and baselines resolved for one request.
///
/// `sub_font_size` and `sub_y` are `0` when there is no second line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    pub size: CanvasSize,
    pub split: LineSplit,
    pub main_font_size: u32,
    pub sub_font_size: u32,
    pub main_y: u32,
    pub sub_y: u32,
}

impl IconLayout {
    pub fn compute(request: &IconRequest) -> Self {
        let params = request.size.params();
        let split = LineSplit::new(&request.text);
        let text_area_width = f64::from(request.size.px()) * params.text_area_fraction;

        let main_font_size = font_size(&split.line1, text_area_width, params.base_font_line1);

        let (sub_font_size, main_y, sub_y) = if split.has_second_line() {
            (
                font_size(&split.line2, text_area_width, params.base_font_line2),
                params.line1_y,
                params.line2_y,
            )
        } else {
            (0, params.single_line_y, 0)
        };

        Self {
            size: request.size,
            split,
            main_font_size,
            sub_font_size,
            main_y,
            sub_y,
        }
    }

    /// Whether a second text element is rendered.
    pub fn has_sub_line(&self) -> bool {
        self.split.has_second_line() && self.sub_font_size > 0
    }
}
