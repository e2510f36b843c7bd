//! Logger setup for the studio binary.
//!
//! Libraries in this workspace only log through the `log` facade; this is
//! the one place a backend (`env_logger`) is installed.

use env_logger::WriteStyle;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"debug"` or `"adbanner_palette=trace,warn"`.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: WriteStyle::Auto }
    }
}

pub const DEFAULT_FILTER: &str = "info";

/// Explicit filter, else `RUST_LOG`, else [`DEFAULT_FILTER`].
fn resolve_filter(explicit: Option<&str>, from_env: Option<&str>) -> String {
    explicit.or(from_env).unwrap_or(DEFAULT_FILTER).to_owned()
}

/// Installs the global logger. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    let from_env = std::env::var("RUST_LOG").ok();
    let filter = resolve_filter(config.env_filter.as_deref(), from_env.as_deref());

    let installed = env_logger::Builder::new()
        .parse_filters(&filter)
        .write_style(config.write_style)
        .format_timestamp(None)
        .try_init();

    if installed.is_ok() {
        log::debug!("logging initialized with filter {filter:?}");
    }
}
