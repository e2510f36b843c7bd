mod cli;
mod file_source;
mod logging;
mod report;
mod swatch;

use adbanner_copy::request::DEFAULT_LOB;
use adbanner_copy::{Analytics, CopyRequest, CopyService, Language, LogSink, ServiceConfig, Theme, TtlCache};
use adbanner_palette::contrast::analyze_contrast;
use adbanner_palette::{
    Color, ColorSet, GeneratorConfig, create_variation, fast_remix_color_set_with, generate_optimal_color_set_with,
};
use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::file_source::FileSource;
use crate::logging::{LoggingConfig, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..Default::default() });

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let analytics = Analytics::new(cli.analytics, LogSink);
    if analytics.is_enabled() {
        log::info!("analytics events are logged under target adbanner::analytics");
    }

    run(cli.command, cli.json, &mut rng, analytics)
}

fn run(command: Command, json: bool, rng: &mut StdRng, analytics: Analytics) -> Result<()> {
    match command {
        Command::Generate { attempts, count } => {
            let config = GeneratorConfig { max_attempts: attempts };
            let sets: Vec<ColorSet> = (0..count).map(|_| generate_optimal_color_set_with(&mut *rng, config)).collect();
            emit(json, &sets, || report::color_sets(&sets))
        }
        Command::Remix { count } => {
            let sets: Vec<ColorSet> = (0..count).map(|_| fast_remix_color_set_with(&mut *rng)).collect();
            for _ in &sets {
                analytics.banner_remixed("colors");
            }
            emit(json, &sets, || report::color_sets(&sets))
        }
        Command::Vary { attempts } => {
            let base = generate_optimal_color_set_with(rng, GeneratorConfig { max_attempts: attempts });
            let variation = create_variation(&base);
            analytics.banner_remixed("variation");
            let both = serde_json::json!({ "base": base, "variation": variation });
            emit(json, &both, || report::color_sets(&[base, variation]))
        }
        Command::Check { foreground, background, large } => {
            let result = analyze_contrast(parse_color(&foreground)?, parse_color(&background)?, large);
            emit(json, &result, || report::contrast(&result))
        }
        Command::Copy { file, topic, theme, language, lob } => {
            let theme = Theme::from_name(&theme);
            let language = Language::from_name(&language);
            let request = CopyRequest::new(topic, language, theme, &lob);
            let mut service = CopyService::new(FileSource::new(file), TtlCache::new(), analytics, ServiceConfig::default());
            let response = service.generate_with(&request, rng);
            emit(json, &response, || report::banners(&response))
        }
        Command::Swatch { out, width, height, remix } => {
            let set = if remix {
                fast_remix_color_set_with(rng)
            } else {
                generate_optimal_color_set_with(rng, GeneratorConfig::default())
            };
            swatch::save(&set, &out, width, height).with_context(|| format!("writing swatch to {}", out.display()))?;
            analytics.banner_downloaded("swatch", DEFAULT_LOB);
            log::info!("wrote {}x{} swatch to {}", width, height, out.display());
            emit(json, &set, || report::color_set(&set))
        }
    }
}

/// Strict parsing for user input: unlike the library's hex helpers, a bad
/// color is an error here rather than a neutral gray.
fn parse_color(input: &str) -> Result<Color> {
    Color::from_hex(input).with_context(|| format!("not a hex color: {input:?}"))
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}
