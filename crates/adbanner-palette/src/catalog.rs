//! Static, read-only color data: the background gradients banners are drawn
//! on and the candidate colors CTA and text selection search over.

use rand::Rng;

use crate::contrast::is_light;
use crate::paint::{Color, Gradient};

const fn g(from: u32, to: u32) -> Gradient {
    Gradient::new(Color::hex(from), Color::hex(to))
}

// ── Gradients ─────────────────────────────────────────────────────────────

/// Every background gradient, in stable order.
///
/// Non-empty; [`random_gradient_with`] relies on it.
pub static GRADIENTS: &[Gradient] = &[
    g(0x98FB98, 0x32CD32),
    g(0x40E0D0, 0x48D1CC),
    g(0xDDA0DD, 0xEE82EE),
    g(0xE6E6FA, 0x9370DB),
    g(0xFFA500, 0xFF8C00),
    g(0x800080, 0x4B0082),
    g(0x87CEEB, 0x1E90FF),
    g(0xFFB6C1, 0xFF69B4),
    g(0xFFC0CB, 0xFF69B4),
    g(0x8B4513, 0xA0522D),
    g(0xE6E6FA, 0xDDA0DD),
    g(0x98FB98, 0x90EE90),
    g(0x90EE90, 0x32CD32),
    g(0x87CEEB, 0x00BFFF),
    g(0xFFA07A, 0xFF7F50),
    g(0x9400D3, 0x800080),
    g(0xDCDCDC, 0xA9A9A9),
    g(0xE0FFFF, 0xB0E0E6),
    g(0xDDA0DD, 0xBA55D3),
    g(0xFF6347, 0xFF4500),
    g(0x9400D3, 0x8B008B),
    g(0xE0FFFF, 0xAFEEEE),
    g(0xFFDAB9, 0xFFE4B5),
    g(0x2F4F4F, 0x000080),
    g(0xF0FFF0, 0x98FB98),
    g(0x4169E1, 0x0000CD),
    g(0x008B8B, 0x006400),
    g(0xFFD700, 0xFFA500),
    g(0xFF69B4, 0xFF1493),
    g(0xFFB6C1, 0xFFC0CB),
    g(0xF0FFFF, 0xE0FFFF),
];

/// Uniform pick from [`GRADIENTS`].
pub fn random_gradient_with<R: Rng + ?Sized>(rng: &mut R) -> Gradient {
    GRADIENTS[rng.gen_range(0..GRADIENTS.len())]
}

pub fn random_gradient() -> Gradient {
    random_gradient_with(&mut rand::thread_rng())
}

// ── CTA candidates ────────────────────────────────────────────────────────

/// Dark, saturated fills for light backgrounds.
pub static CTA_FOR_LIGHT_BG: &[Color] = &[
    Color::hex(0x1E90FF),
    Color::hex(0x32CD32),
    Color::hex(0x9370DB),
    Color::hex(0x00CED1),
];

/// Bright fills for dark backgrounds.
pub static CTA_FOR_DARK_BG: &[Color] = &[
    Color::hex(0xFFD700),
    Color::hex(0xFFA500),
    Color::hex(0xFF6B35),
    Color::hex(0xF7931E),
];

/// Mid-tones searched when the primary list falls short.
pub static CTA_NEUTRAL: &[Color] = &[
    Color::hex(0xFF1493),
    Color::hex(0xFF4500),
    Color::hex(0x4169E1),
    Color::hex(0x228B22),
];

/// Primary CTA list for a background: the one opposite its lightness.
pub fn cta_palette_for(background: Color) -> &'static [Color] {
    if is_light(background) { CTA_FOR_LIGHT_BG } else { CTA_FOR_DARK_BG }
}

// ── Text candidates ───────────────────────────────────────────────────────

/// Body and heading candidates: white, black and five grays.
pub static TEXT_CANDIDATES: &[Color] = &[
    Color::hex(0xFFFFFF),
    Color::hex(0x000000),
    Color::hex(0x1A1A1A),
    Color::hex(0xF5F5F5),
    Color::hex(0x666666),
    Color::hex(0xE5E5E5),
    Color::hex(0x2D2D2D),
];
