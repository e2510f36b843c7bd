use std::fmt;

use serde::{Serialize, Serializer};

/// Opaque sRGB color with 8-bit channels.
///
/// Displayed and serialized as uppercase `#RRGGBB`, the form the rendering
/// layer consumes as a style value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Stand-in for gradient stops that cannot be read.
    pub const NEUTRAL: Color = Color::rgb(0x80, 0x80, 0x80);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` literal.
    ///
    /// Used by the static tables so they read like the hex strings they mirror.
    #[inline]
    pub const fn hex(packed: u32) -> Self {
        Self::rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Parses `#RRGGBB` or the `#RGB` shorthand. The leading `#` is optional.
    ///
    /// Returns `None` for anything else; callers decide what a bad color means.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        match digits.len() {
            // `#abc` expands each digit: `a` -> `aa`.
            3 => Some(Self::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels scaled to `[0, 1]`.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| f64::from(c) / 255.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
