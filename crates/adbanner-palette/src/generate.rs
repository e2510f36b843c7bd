//! Best-of-N color-set generator.
//!
//! Each attempt samples a gradient and derives its colors; valid attempts are
//! scored and the highest score wins. If no attempt validates, the result
//! comes from the remix table, so generation never fails.

use rand::Rng;

use crate::catalog::random_gradient_with;
use crate::remix::fast_remix_color_set_with;
use crate::select::{TextRole, select_cta_color, select_text_color};
use crate::set::ColorSet;

pub const DEFAULT_MAX_ATTEMPTS: usize = 15;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Upper bound on sampled gradients. Zero goes straight to the remix table.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

/// One attempt: random gradient, derived CTA / body / heading colors.
///
/// The result is not validated.
pub fn harmonious_color_set_with<R: Rng + ?Sized>(rng: &mut R) -> ColorSet {
    let gradient = random_gradient_with(rng);
    let background = gradient.dominant_color();

    ColorSet::derive(
        gradient,
        select_cta_color(background),
        select_text_color(background, TextRole::Body),
        select_text_color(background, TextRole::Heading),
    )
}

pub fn generate_optimal_color_set_with<R: Rng + ?Sized>(rng: &mut R, config: GeneratorConfig) -> ColorSet {
    let mut best: Option<(ColorSet, f64)> = None;

    for _ in 0..config.max_attempts {
        let candidate = harmonious_color_set_with(rng);
        if !candidate.is_valid() {
            continue;
        }
        let score = candidate.score();
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((set, score)) => {
            log::trace!("color set {} scored {score:.2}", set.gradient);
            set
        }
        None => {
            log::debug!(
                "no valid color set in {} attempts, using remix table",
                config.max_attempts
            );
            fast_remix_color_set_with(rng)
        }
    }
}

/// [`generate_optimal_color_set_with`] on the thread-local RNG.
pub fn generate_optimal_color_set(max_attempts: usize) -> ColorSet {
    generate_optimal_color_set_with(&mut rand::thread_rng(), GeneratorConfig { max_attempts })
}
