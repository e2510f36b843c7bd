use std::fmt;

use serde::{Serialize, Serializer};

use super::Color;
use crate::contrast::relative_luminance;

/// Direction of every banner gradient, in CSS degrees (top-left to bottom-right).
pub const GRADIENT_ANGLE_DEG: u16 = 135;

/// Two-stop diagonal linear gradient.
///
/// Identified by its CSS definition (see [`Gradient::css`]). For contrast
/// purposes the whole gradient is represented by its first stop, the
/// [dominant color](Gradient::dominant_color).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    #[inline]
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    #[inline]
    pub const fn dominant_color(&self) -> Color {
        self.from
    }

    /// `linear-gradient(135deg, #RRGGBB 0%, #RRGGBB 100%)`.
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Reads the first two `#RRGGBB` stops out of a CSS gradient definition.
    ///
    /// The angle and stop positions are not checked; every catalog gradient
    /// uses the same ones.
    pub fn from_css(definition: &str) -> Option<Self> {
        let mut stops = hex_stops(definition);
        Some(Self::new(stops.next()?, stops.next()?))
    }

    /// Average relative luminance of both stops.
    pub fn average_luminance(&self) -> f64 {
        (relative_luminance(self.from) + relative_luminance(self.to)) / 2.0
    }

    pub fn is_dark(&self) -> bool {
        self.average_luminance() < 0.5
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({GRADIENT_ANGLE_DEG}deg, {} 0%, {} 100%)", self.from, self.to)
    }
}

impl Serialize for Gradient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Dominant color of an arbitrary CSS gradient string.
///
/// Takes the first `#RRGGBB` stop, else the first `rgb()`/`rgba()` stop,
/// else [`Color::NEUTRAL`].
pub fn dominant_color_of_css(definition: &str) -> Color {
    hex_stops(definition)
        .next()
        .or_else(|| rgb_stop(definition))
        .unwrap_or(Color::NEUTRAL)
}

fn hex_stops(definition: &str) -> impl Iterator<Item = Color> + '_ {
    definition
        .match_indices('#')
        .filter_map(move |(at, _)| definition.get(at + 1..at + 7).and_then(Color::from_hex))
}

fn rgb_stop(definition: &str) -> Option<Color> {
    let start = definition.find("rgb")?;
    let rest = &definition[start..];
    let open = rest.find('(')?;
    let close = rest.find(')')?;
    let mut channels = rest.get(open + 1..close)?.split(',').map(|c| c.trim().parse::<u8>().ok());

    Some(Color::rgb(channels.next()??, channels.next()??, channels.next()??))
}
