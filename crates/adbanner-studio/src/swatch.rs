//! Raster preview of a color set.
//!
//! Draws the 135° background gradient with flat placeholder bars for the
//! heading, body copy and CTA, so a set can be eyeballed without a browser.

use std::path::Path;

use adbanner_palette::{Color, ColorSet};
use image::{ImageResult, Rgb, RgbImage};

pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 250;

/// A rectangle in fractions of the banner size.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Block {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl Block {
    const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Pixel bounds `(x0, y0, x1, y1)`, end-exclusive and clamped to the image.
    fn pixels(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let px = |f: f32, extent: u32| ((f * extent as f32).round() as u32).min(extent);
        (px(self.x0, width), px(self.y0, height), px(self.x1, width), px(self.y1, height))
    }
}

const HEADING: Block = Block::new(0.08, 0.18, 0.70, 0.30);
const BODY: Block = Block::new(0.08, 0.40, 0.60, 0.48);
const CTA: Block = Block::new(0.08, 0.65, 0.45, 0.85);
const CTA_LABEL: Block = Block::new(0.14, 0.72, 0.39, 0.78);

#[inline]
fn pixel(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Position along the top-left to bottom-right diagonal, in `[0, 1]`.
fn diagonal(x: u32, y: u32, width: u32, height: u32) -> f32 {
    let fx = x as f32 / width.saturating_sub(1).max(1) as f32;
    let fy = y as f32 / height.saturating_sub(1).max(1) as f32;
    (fx + fy) / 2.0
}

fn fill(img: &mut RgbImage, block: Block, color: Color) {
    let (x0, y0, x1, y1) = block.pixels(img.width(), img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, pixel(color));
        }
    }
}

pub fn render(set: &ColorSet, width: u32, height: u32) -> RgbImage {
    let (width, height) = (width.max(1), height.max(1));
    let (from, to) = (set.gradient.from, set.gradient.to);

    let mut img = RgbImage::from_fn(width, height, |x, y| pixel(lerp(from, to, diagonal(x, y, width, height))));
    fill(&mut img, HEADING, set.heading_color);
    fill(&mut img, BODY, set.text_color);
    fill(&mut img, CTA, set.cta_color);
    fill(&mut img, CTA_LABEL, set.cta_text_color());
    img
}

/// Renders and writes a PNG to `path`.
pub fn save(set: &ColorSet, path: &Path, width: u32, height: u32) -> ImageResult<()> {
    render(set, width, height).save(path)
}
