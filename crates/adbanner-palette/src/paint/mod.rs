//! Paint values handed to the banner renderer.
//!
//! Scope:
//! - opaque sRGB colors (hex in, hex out)
//! - two-stop diagonal gradients and their CSS form

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{GRADIENT_ANGLE_DEG, Gradient, dominant_color_of_css};
