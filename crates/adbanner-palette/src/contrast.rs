//! Simplified WCAG luminance and contrast model.
//!
//! Pure functions over [`Color`]. String-accepting helpers never fail: an
//! unparseable color counts as a mid-gray with luminance [`NEUTRAL_LUMINANCE`].

use serde::Serialize;

use crate::paint::Color;

/// Luminance substituted for colors that fail to parse.
pub const NEUTRAL_LUMINANCE: f64 = 0.5;

/// Highest possible contrast ratio (black on white).
pub const MAX_CONTRAST: f64 = 21.0;

/// sRGB channel in `[0, 1]` to linear light.
#[inline]
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.to_unit().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Luminance of a hex string, or [`NEUTRAL_LUMINANCE`] if it does not parse.
pub fn relative_luminance_hex(hex: &str) -> f64 {
    Color::from_hex(hex).map_or(NEUTRAL_LUMINANCE, relative_luminance)
}

#[inline]
fn ratio_of(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// `(L_lighter + 0.05) / (L_darker + 0.05)`; symmetric, in `[1, 21]`.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    ratio_of(relative_luminance(a), relative_luminance(b))
}

/// [`contrast_ratio`] over hex strings; bad input is treated as mid-gray.
pub fn contrast_ratio_hex(a: &str, b: &str) -> f64 {
    ratio_of(relative_luminance_hex(a), relative_luminance_hex(b))
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum WcagLevel {
    Aa,
    Aaa,
}

/// AA: 4.5 (3.0 for large text). AAA: 7.0 (4.5 for large text).
pub fn meets_threshold(ratio: f64, level: WcagLevel, is_large_text: bool) -> bool {
    let required = match (level, is_large_text) {
        (WcagLevel::Aa, false) => 4.5,
        (WcagLevel::Aa, true) => 3.0,
        (WcagLevel::Aaa, false) => 7.0,
        (WcagLevel::Aaa, true) => 4.5,
    };
    ratio >= required
}

/// Contrast of one foreground/background pair against both WCAG levels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub is_large_text: bool,
}

pub fn analyze_contrast(foreground: Color, background: Color, is_large_text: bool) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    ContrastResult {
        ratio,
        meets_aa: meets_threshold(ratio, WcagLevel::Aa, is_large_text),
        meets_aaa: meets_threshold(ratio, WcagLevel::Aaa, is_large_text),
        is_large_text,
    }
}

pub fn is_light(color: Color) -> bool {
    relative_luminance(color) > 0.5
}

/// White or black, whichever contrasts more with `background` (black on ties).
pub fn optimal_text_color(background: Color) -> Color {
    if contrast_ratio(Color::WHITE, background) > contrast_ratio(Color::BLACK, background) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
