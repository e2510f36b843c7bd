use std::path::PathBuf;

use adbanner_copy::request::DEFAULT_LOB;
use adbanner_palette::generate::DEFAULT_MAX_ATTEMPTS;
use clap::{Parser, Subcommand};

use crate::swatch::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "adbanner-studio", version, about = "Accessible color sets and copy for banner ads")]
pub struct Cli {
    /// Seed for every random choice; omit for a fresh run each time.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log filter, e.g. `debug` or `adbanner_palette=trace`. Overrides RUST_LOG.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log analytics events.
    #[arg(long, global = true)]
    pub analytics: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Best-of-N color sets.
    Generate {
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        attempts: usize,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Color sets from the pre-validated remix table.
    Remix {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// A generated set next to a variation with a different CTA.
    Vary {
        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        attempts: usize,
    },
    /// Contrast of two hex colors against WCAG AA and AAA.
    Check {
        foreground: String,
        background: String,
        /// Apply the large-text thresholds.
        #[arg(long)]
        large: bool,
    },
    /// Banner copy from a saved service reply, or fallback copy if unusable.
    Copy {
        file: PathBuf,
        #[arg(long, default_value = "")]
        topic: String,
        #[arg(long, default_value = "value")]
        theme: String,
        #[arg(long, default_value = "english")]
        language: String,
        #[arg(long, default_value = DEFAULT_LOB)]
        lob: String,
    },
    /// Write a PNG preview of a color set.
    Swatch {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..=4096))]
        width: u32,
        #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..=4096))]
        height: u32,
        /// Take the set from the remix table instead of generating one.
        #[arg(long)]
        remix: bool,
    },
}
