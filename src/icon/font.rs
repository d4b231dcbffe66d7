//! Font size estimation.
//!
//! There is no font metrics lookup here: rendered width is approximated as
//! `chars * size * factor`, which is close enough for bold Arial in an icon.

/// Per-character width factor for text with at least one uppercase letter.
const UPPER_WIDTH_FACTOR: f64 = 0.65;
/// Per-character width factor for lowercase-only text.
const LOWER_WIDTH_FACTOR: f64 = 0.55;

/// Shrink target relative to the exact fit, leaves a small margin.
const SHRINK_MARGIN: f64 = 0.95;
/// Text narrower than this share of the available width is enlarged.
const SHORT_TEXT_RATIO: f64 = 0.7;
const GROW_FACTOR: f64 = 1.1;

/// Estimated rendered width of `text` at `size` pixels.
pub fn estimate_width(text: &str, size: u32) -> f64 {
    let factor = if text.chars().any(char::is_uppercase) {
        UPPER_WIDTH_FACTOR
    } else {
        LOWER_WIDTH_FACTOR
    };
    text.chars().count() as f64 * f64::from(size) * factor
}

/// Pick a font size so `text` fits within `max_width`.
///
/// - too wide: scaled down to fit (with margin), never below `base / 2`
/// - much narrower than the space: `base` grown by 10%
/// - otherwise: `base`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn font_size(text: &str, max_width: f64, base: u32) -> u32 {
    let estimated = estimate_width(text, base);
    let base_f = f64::from(base);

    if estimated > max_width {
        let scaled = (base_f * (max_width / estimated) * SHRINK_MARGIN) as u32;
        scaled.max(base / 2)
    } else if estimated < max_width * SHORT_TEXT_RATIO {
        (base_f * GROW_FACTOR) as u32
    } else {
        base
    }
}
