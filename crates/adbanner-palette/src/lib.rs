//! Accessible color selection for banner ads.
//!
//! Every banner owns a [`ColorSet`]: a two-stop background gradient plus a
//! CTA fill, a body text color and a heading color, each chosen to clear a
//! minimum contrast ratio against the gradient's dominant (first) stop.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Color`, `Gradient` |
//! | [`contrast`] | luminance, contrast ratio, WCAG thresholds |
//! | [`catalog`] | static gradient list and candidate palettes |
//! | [`select`] | CTA / text color selection |
//! | [`set`] | `ColorSet` and its validator |
//! | [`generate`] | best-of-N color-set generator |
//! | [`remix`] | pre-validated remix table and CTA variation |
//!
//! # Quick start
//!
//! ```rust
//! use adbanner_palette::{create_variation, generate_optimal_color_set};
//!
//! let set = generate_optimal_color_set(15);
//! assert!(set.is_valid());
//!
//! let nudged = create_variation(&set);
//! assert_eq!(nudged.gradient, set.gradient);
//! ```
//!
//! Every random operation also has a `*_with` form taking any [`rand::Rng`],
//! so callers can seed it.

pub mod catalog;
pub mod contrast;
pub mod generate;
pub mod paint;
pub mod remix;
pub mod select;
pub mod set;

pub use contrast::{contrast_ratio, is_light, optimal_text_color};
pub use generate::{GeneratorConfig, generate_optimal_color_set, generate_optimal_color_set_with};
pub use paint::{Color, Gradient};
pub use remix::{create_variation, fast_remix_color_set, fast_remix_color_set_with};
pub use set::{ColorSet, ContrastRatios, validate_color_set};
