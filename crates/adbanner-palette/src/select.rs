//! CTA and text color selection against a single background color.

use crate::catalog::{CTA_NEUTRAL, TEXT_CANDIDATES, cta_palette_for};
use crate::contrast::{contrast_ratio, optimal_text_color};
use crate::paint::Color;

/// Minimum a primary-palette CTA must reach before the neutral list is tried.
pub const MIN_CTA_CONTRAST: f64 = 3.0;

/// Which piece of copy a text color is for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextRole {
    Body,
    Heading,
}

impl TextRole {
    /// Headings are large, so they get the looser bar.
    pub const fn min_contrast(self) -> f64 {
        match self {
            TextRole::Body => 3.2,
            TextRole::Heading => 2.8,
        }
    }
}

/// Highest-contrast candidate against `background` with a ratio of at least
/// `min_ratio`. The earliest candidate wins ties.
pub fn best_contrast<I>(candidates: I, background: Color, min_ratio: f64) -> Option<(Color, f64)>
where
    I: IntoIterator<Item = Color>,
{
    candidates
        .into_iter()
        .map(|color| (color, contrast_ratio(color, background)))
        .filter(|&(_, ratio)| ratio >= min_ratio)
        .fold(None, |best, (color, ratio)| match best {
            Some((_, best_ratio)) if best_ratio >= ratio => best,
            _ => Some((color, ratio)),
        })
}

/// CTA fill for `background`.
///
/// Searches the palette opposite the background's lightness for the best
/// ratio of at least [`MIN_CTA_CONTRAST`]; if nothing clears it, takes the
/// best neutral mid-tone with no minimum.
pub fn select_cta_color(background: Color) -> Color {
    let primary = cta_palette_for(background);
    best_contrast(primary.iter().copied(), background, MIN_CTA_CONTRAST)
        .or_else(|| best_contrast(CTA_NEUTRAL.iter().copied(), background, 0.0))
        .map_or(primary[0], |(color, _)| color)
}

/// Body or heading color for `background`.
///
/// Candidates are ranked by contrast and the first that clears the role's
/// minimum wins; otherwise plain white or black.
pub fn select_text_color(background: Color, role: TextRole) -> Color {
    let mut ranked: Vec<(Color, f64)> = TEXT_CANDIDATES
        .iter()
        .map(|&color| (color, contrast_ratio(color, background)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .find(|&(_, ratio)| ratio >= role.min_contrast())
        .map_or_else(|| optimal_text_color(background), |(color, _)| color)
}
