//! Plain-text rendering of command results.

use adbanner_copy::{Banner, BannerResponse};
use adbanner_palette::ColorSet;
use adbanner_palette::contrast::ContrastResult;

fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

pub fn color_set(set: &ColorSet) -> String {
    let r = &set.contrast_ratios;
    format!(
        "gradient  {}\n\
         heading   {}  {:.2}:1\n\
         body      {}  {:.2}:1\n\
         cta       {}  {:.2}:1  label {}\n\
         score     {:.2}",
        set.gradient,
        set.heading_color,
        r.heading_to_background,
        set.text_color,
        r.text_to_background,
        set.cta_color,
        r.cta_to_background,
        set.cta_text_color(),
        set.score(),
    )
}

pub fn color_sets(sets: &[ColorSet]) -> String {
    sets.iter().map(color_set).collect::<Vec<_>>().join("\n\n")
}

pub fn contrast(result: &ContrastResult) -> String {
    format!(
        "{:.2}:1  AA {}  AAA {}{}",
        result.ratio,
        verdict(result.meets_aa),
        verdict(result.meets_aaa),
        if result.is_large_text { "  (large text)" } else { "" }
    )
}

fn banner(index: usize, banner: &Banner) -> String {
    let c = &banner.content;
    let head = format!("{}. {} / {} [{}]", index + 1, c.headline, c.description, c.cta_text);
    let Some(points) = &c.comparison_points else {
        return head;
    };
    let rows = points.us.iter().zip(&points.them).map(|(us, them)| format!("\n   + {us}  vs  - {them}"));
    std::iter::once(head).chain(rows).collect()
}

pub fn banners(response: &BannerResponse) -> String {
    response.banners.iter().enumerate().map(|(i, b)| banner(i, b)).collect::<Vec<_>>().join("\n")
}
