//! Pre-validated color sets for instant remixes, and single-accent variations.

use rand::Rng;

use crate::catalog::{CTA_NEUTRAL, cta_palette_for};
use crate::contrast::{contrast_ratio, optimal_text_color};
use crate::paint::{Color, Gradient};
use crate::select::{MIN_CTA_CONTRAST, best_contrast};
use crate::set::{ColorSet, ContrastRatios};

const fn entry(
    from: u32,
    to: u32,
    cta: u32,
    text: u32,
    heading: u32,
    [text_ratio, heading_ratio, cta_ratio]: [f64; 3],
    cta_text: u32,
) -> ColorSet {
    ColorSet {
        gradient: Gradient::new(Color::hex(from), Color::hex(to)),
        cta_color: Color::hex(cta),
        text_color: Color::hex(text),
        heading_color: Color::hex(heading),
        contrast_ratios: ContrastRatios {
            text_to_background: text_ratio,
            heading_to_background: heading_ratio,
            cta_to_background: cta_ratio,
            cta_text_to_cta: Color::hex(cta_text),
        },
    }
}

/// Hand-vetted sets across the hue range. Ratios are stored to two decimals.
///
/// Every entry passes the validator, and so does its [`create_variation`].
pub static FAST_REMIX_TABLE: &[ColorSet] = &[
    // greens
    entry(0x98FB98, 0x32CD32, 0x1A1A1A, 0x000000, 0x1A1A1A, [16.59, 13.75, 13.75], 0xFFFFFF),
    entry(0x90EE90, 0x32CD32, 0x1A1A1A, 0x000000, 0x1A1A1A, [14.82, 12.28, 12.28], 0xFFFFFF),
    entry(0xF0FFF0, 0x98FB98, 0x1A1A1A, 0x1A1A1A, 0x000000, [16.80, 20.27, 16.80], 0xFFFFFF),
    entry(0x005F5F, 0x006400, 0xFFD700, 0xFFFFFF, 0xFFFFFF, [7.49, 7.49, 5.34], 0x000000),
    // blues
    entry(0xE0FFFF, 0xB0E0E6, 0x1A1A1A, 0x1A1A1A, 0x000000, [16.51, 19.92, 16.51], 0xFFFFFF),
    entry(0xF0FFFF, 0xE0FFFF, 0x1E90FF, 0x1A1A1A, 0x000000, [16.95, 20.45, 3.15], 0x000000),
    entry(0x191970, 0x4169E1, 0xFFD700, 0xFFFFFF, 0xFFFFFF, [14.85, 14.85, 10.59], 0x000000),
    // purples
    entry(0x800080, 0x4B0082, 0xFFD700, 0xFFFFFF, 0xFFFFFF, [9.42, 9.42, 6.72], 0x000000),
    entry(0x9400D3, 0x800080, 0xFFFFFF, 0xFFFFFF, 0xFFFFFF, [6.56, 6.56, 6.56], 0x000000),
    entry(0xE6E6FA, 0xDDA0DD, 0x1A1A1A, 0x1A1A1A, 0x000000, [14.14, 17.06, 14.14], 0xFFFFFF),
    // oranges and golds
    entry(0xFFD700, 0xFFA500, 0x1A1A1A, 0x000000, 0x1A1A1A, [14.97, 12.41, 12.41], 0xFFFFFF),
    entry(0xFFDAB9, 0xFFE4B5, 0x1A1A1A, 0x1A1A1A, 0x000000, [13.24, 15.98, 13.24], 0xFFFFFF),
    entry(0xFFEFD5, 0xFFDAB9, 0xFF4500, 0x1A1A1A, 0x000000, [15.38, 18.56, 3.04], 0x000000),
    entry(0xB22222, 0x8B0000, 0xFFD700, 0xFFFFFF, 0xFFFFFF, [6.68, 6.68, 4.76], 0x000000),
    // pinks
    entry(0xFFE4E1, 0xFFB6C1, 0x1A1A1A, 0x1A1A1A, 0x000000, [14.45, 17.44, 14.45], 0xFFFFFF),
    entry(0xFFF0F5, 0xFFC0CB, 0x9370DB, 0x1A1A1A, 0x000000, [15.78, 19.03, 3.41], 0x000000),
    entry(0xC71585, 0xFF1493, 0xFFFFFF, 0xFFFFFF, 0xFFFFFF, [5.42, 5.42, 5.42], 0x000000),
    // neutrals
    entry(0xDCDCDC, 0xA9A9A9, 0x1A1A1A, 0x1A1A1A, 0x000000, [12.69, 15.31, 12.69], 0xFFFFFF),
    entry(0xF5F5F5, 0xDCDCDC, 0x1A1A1A, 0x000000, 0x1A1A1A, [19.26, 15.96, 15.96], 0xFFFFFF),
    // darks
    entry(0x2F4F4F, 0x000080, 0xFFD700, 0xFFFFFF, 0xFFFFFF, [8.93, 8.93, 6.37], 0x000000),
    entry(0x2D2D2D, 0x1A1A1A, 0xFFD700, 0xF5F5F5, 0xFFFFFF, [12.63, 13.77, 9.82], 0x000000),
];

/// Uniform pick from [`FAST_REMIX_TABLE`], returned by value.
pub fn fast_remix_color_set_with<R: Rng + ?Sized>(rng: &mut R) -> ColorSet {
    FAST_REMIX_TABLE[rng.gen_range(0..FAST_REMIX_TABLE.len())]
}

pub fn fast_remix_color_set() -> ColorSet {
    fast_remix_color_set_with(&mut rand::thread_rng())
}

/// New CTA on the same background.
///
/// Gradient, text colors and their ratios are carried over. The CTA is the
/// highest-contrast member of the background's primary palette plus the
/// neutral list, excluding the current CTA; at least 3:1 where some candidate
/// reaches it, otherwise the best available.
pub fn create_variation(base: &ColorSet) -> ColorSet {
    let background = base.background();
    let pool: Vec<Color> = cta_palette_for(background)
        .iter()
        .chain(CTA_NEUTRAL)
        .copied()
        .filter(|&color| color != base.cta_color)
        .collect();

    let cta_color = best_contrast(pool.iter().copied(), background, MIN_CTA_CONTRAST)
        .or_else(|| best_contrast(pool.iter().copied(), background, 0.0))
        .map_or(base.cta_color, |(color, _)| color);

    ColorSet {
        cta_color,
        contrast_ratios: ContrastRatios {
            cta_to_background: contrast_ratio(cta_color, background),
            cta_text_to_cta: optimal_text_color(cta_color),
            ..base.contrast_ratios
        },
        ..*base
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::contrast::is_light;
    use crate::generate::{GeneratorConfig, generate_optimal_color_set_with};

    // ── table ─────────────────────────────────────────────────────────────

    #[test]
    fn table_is_large_and_distinct() {
        assert!(FAST_REMIX_TABLE.len() >= 20);
        let gradients: HashSet<_> = FAST_REMIX_TABLE.iter().map(|s| s.gradient).collect();
        assert_eq!(gradients.len(), FAST_REMIX_TABLE.len());
    }

    #[test]
    fn table_spans_light_and_dark_backgrounds() {
        let light = FAST_REMIX_TABLE.iter().filter(|s| is_light(s.background())).count();
        assert!(light > 0 && light < FAST_REMIX_TABLE.len());
    }

    #[test]
    fn every_entry_is_valid() {
        for set in FAST_REMIX_TABLE {
            assert!(set.is_valid(), "{}", set.gradient);
        }
    }

    #[test]
    fn stored_ratios_match_colors() {
        for set in FAST_REMIX_TABLE {
            let derived = ColorSet::derive(set.gradient, set.cta_color, set.text_color, set.heading_color);
            let (s, d) = (set.contrast_ratios, derived.contrast_ratios);
            assert!((s.text_to_background - d.text_to_background).abs() <= 0.01, "{}", set.gradient);
            assert!((s.heading_to_background - d.heading_to_background).abs() <= 0.01, "{}", set.gradient);
            assert!((s.cta_to_background - d.cta_to_background).abs() <= 0.01, "{}", set.gradient);
            assert_eq!(s.cta_text_to_cta, d.cta_text_to_cta, "{}", set.gradient);
        }
    }

    #[test]
    fn zero_rng_picks_first_entry() {
        assert_eq!(fast_remix_color_set_with(&mut StepRng::new(0, 0)), FAST_REMIX_TABLE[0]);
    }

    #[test]
    fn remix_returns_a_table_entry() {
        for _ in 0..50 {
            assert!(FAST_REMIX_TABLE.contains(&fast_remix_color_set()));
        }
    }

    #[test]
    fn remix_result_is_an_independent_copy() {
        let mut set = fast_remix_color_set_with(&mut StepRng::new(0, 0));
        set.cta_color = Color::hex(0x123456);
        assert_ne!(FAST_REMIX_TABLE[0].cta_color, set.cta_color);
    }

    // ── variation ─────────────────────────────────────────────────────────

    #[test]
    fn variation_of_every_entry_is_valid() {
        for set in FAST_REMIX_TABLE {
            let varied = create_variation(set);
            assert!(varied.is_valid(), "{} -> {}", set.gradient, varied.cta_color);
        }
    }

    #[test]
    fn variation_keeps_background_and_text() {
        for set in FAST_REMIX_TABLE {
            let varied = create_variation(set);
            assert_eq!(varied.gradient, set.gradient);
            assert_eq!(varied.text_color, set.text_color);
            assert_eq!(varied.heading_color, set.heading_color);
            assert_eq!(varied.contrast_ratios.text_to_background, set.contrast_ratios.text_to_background);
            assert_eq!(
                varied.contrast_ratios.heading_to_background,
                set.contrast_ratios.heading_to_background
            );
        }
    }

    #[test]
    fn variation_changes_the_accent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let base = generate_optimal_color_set_with(&mut rng, GeneratorConfig::default());
            let varied = create_variation(&base);
            assert_ne!(varied.cta_color, base.cta_color);
            assert_eq!(varied.gradient, base.gradient);
            assert_eq!(varied.text_color, base.text_color);
            assert_eq!(varied.heading_color, base.heading_color);
        }
    }

    #[test]
    fn variation_recomputes_cta_ratios() {
        let varied = create_variation(&FAST_REMIX_TABLE[0]);
        let background = varied.background();
        assert_eq!(varied.contrast_ratios.cta_to_background, contrast_ratio(varied.cta_color, background));
        assert_eq!(varied.cta_text_color(), optimal_text_color(varied.cta_color));
    }

    #[test]
    fn light_green_variation_skips_current_cta() {
        // On #98FB98 the best candidate is royal blue; excluding it moves to forest green.
        let base = ColorSet::derive(
            Gradient::new(Color::hex(0x98FB98), Color::hex(0x32CD32)),
            Color::hex(0x4169E1),
            Color::BLACK,
            Color::BLACK,
        );
        assert_eq!(create_variation(&base).cta_color, Color::hex(0x228B22));
    }

    #[test]
    fn variation_falls_back_to_best_available() {
        // Nothing reaches 3:1 on tomato, yet a different CTA is still chosen.
        let base = ColorSet::derive(
            Gradient::new(Color::hex(0xFF6347), Color::hex(0xFF4500)),
            Color::hex(0xFFD700),
            Color::BLACK,
            Color::BLACK,
        );
        let varied = create_variation(&base);
        assert_ne!(varied.cta_color, base.cta_color);
        assert!(varied.contrast_ratios.cta_to_background < MIN_CTA_CONTRAST);
    }
}
