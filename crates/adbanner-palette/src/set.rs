use serde::Serialize;

use crate::contrast::{contrast_ratio, optimal_text_color};
use crate::paint::{Color, Gradient};

// ── Validator thresholds ──────────────────────────────────────────────────
//
// Deliberately below WCAG AA: the product favors color variety over strict
// compliance.

pub const VALID_TEXT_CONTRAST: f64 = 3.0;
pub const VALID_HEADING_CONTRAST: f64 = 3.0;
pub const VALID_CTA_CONTRAST: f64 = 2.5;
pub const VALID_CTA_TEXT_CONTRAST: f64 = 3.0;

/// Ratios of each foreground against the gradient's dominant color, plus the
/// label color chosen for the CTA button.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastRatios {
    pub text_to_background: f64,
    pub heading_to_background: f64,
    pub cta_to_background: f64,
    /// Not a ratio: the text color that sits on top of the CTA fill.
    pub cta_text_to_cta: Color,
}

/// Complete styling for one banner.
///
/// Built fresh per generation or remix and replaced wholesale; never shared
/// between banners.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    pub gradient: Gradient,
    pub cta_color: Color,
    pub text_color: Color,
    pub heading_color: Color,
    pub contrast_ratios: ContrastRatios,
}

impl ColorSet {
    /// Assembles a set and computes its ratios from the colors.
    pub fn derive(gradient: Gradient, cta_color: Color, text_color: Color, heading_color: Color) -> Self {
        let background = gradient.dominant_color();
        Self {
            gradient,
            cta_color,
            text_color,
            heading_color,
            contrast_ratios: ContrastRatios {
                text_to_background: contrast_ratio(text_color, background),
                heading_to_background: contrast_ratio(heading_color, background),
                cta_to_background: contrast_ratio(cta_color, background),
                cta_text_to_cta: optimal_text_color(cta_color),
            },
        }
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.gradient.dominant_color()
    }

    /// Label color for the CTA button.
    #[inline]
    pub fn cta_text_color(&self) -> Color {
        self.contrast_ratios.cta_text_to_cta
    }

    /// Unweighted sum of the three background ratios.
    pub fn score(&self) -> f64 {
        let r = &self.contrast_ratios;
        r.text_to_background + r.heading_to_background + r.cta_to_background
    }

    pub fn is_valid(&self) -> bool {
        validate_color_set(self)
    }
}

/// Checks a set against the relaxed thresholds.
///
/// Ratios are recomputed from the colors; the stored ones are not trusted.
pub fn validate_color_set(set: &ColorSet) -> bool {
    let background = set.background();
    contrast_ratio(set.text_color, background) >= VALID_TEXT_CONTRAST
        && contrast_ratio(set.heading_color, background) >= VALID_HEADING_CONTRAST
        && contrast_ratio(set.cta_color, background) >= VALID_CTA_CONTRAST
        && contrast_ratio(set.cta_text_color(), set.cta_color) >= VALID_CTA_TEXT_CONTRAST
}
