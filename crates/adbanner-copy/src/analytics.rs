//! Usage events for banner generation and interaction.
//!
//! [`Analytics`] is a plain object handed to whoever records events. When
//! disabled (development) events are only logged; when enabled they go to an
//! [`EventSink`].

use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    fn new(action: &str, category: &str) -> Self {
        Self {
            action: action.to_owned(),
            category: category.to_owned(),
            label: None,
            value: None,
            properties: Map::new(),
        }
    }

    fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    fn property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_owned(), value.into());
        self
    }
}

/// Destination for enabled analytics.
pub trait EventSink: Send + Sync {
    fn send(&self, event: &AnalyticsEvent);
}

/// Writes each event as one JSON line at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn send(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(line) => log::info!(target: "adbanner::analytics", "{line}"),
            Err(err) => log::error!("analytics event not serializable: {err}"),
        }
    }
}

pub struct Analytics {
    enabled: bool,
    sink: Box<dyn EventSink>,
}

impl Analytics {
    pub fn new(enabled: bool, sink: impl EventSink + 'static) -> Self {
        Self { enabled, sink: Box::new(sink) }
    }

    /// Log-only recorder.
    pub fn disabled() -> Self {
        Self::new(false, LogSink)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn track(&self, event: AnalyticsEvent) {
        if !self.enabled {
            log::debug!("analytics (dev): {event:?}");
            return;
        }
        self.sink.send(&event);
    }

    // ── banner ────────────────────────────────────────────────────────────

    pub fn banner_generation_started(&self, lob: &str, theme: &str, language: &str) {
        self.track(
            AnalyticsEvent::new("banner_generation_started", "banner")
                .property("lob", lob)
                .property("theme", theme)
                .property("language", language),
        );
    }

    /// `duration` is reported in milliseconds.
    pub fn banner_generation_completed(&self, lob: &str, banner_count: usize, duration: Duration) {
        self.track(
            AnalyticsEvent::new("banner_generation_completed", "banner")
                .value(duration.as_secs_f64() * 1000.0)
                .property("lob", lob)
                .property("bannerCount", banner_count),
        );
    }

    pub fn banner_downloaded(&self, banner_type: &str, lob: &str) {
        self.track(AnalyticsEvent::new("banner_downloaded", "banner").label(banner_type).property("lob", lob));
    }

    pub fn banner_remixed(&self, banner_type: &str) {
        self.track(AnalyticsEvent::new("banner_remixed", "banner").label(banner_type));
    }

    // ── interaction ───────────────────────────────────────────────────────

    pub fn dropdown_changed(&self, dropdown: &str, value: &str) {
        self.track(AnalyticsEvent::new("dropdown_changed", "interaction").label(dropdown).property("value", value));
    }

    pub fn banner_modal_opened(&self, banner_type: &str) {
        self.track(AnalyticsEvent::new("banner_modal_opened", "interaction").label(banner_type));
    }

    // ── errors ────────────────────────────────────────────────────────────

    /// `context` entries are merged into the event properties after `message`.
    pub fn error(&self, error_type: &str, message: &str, context: Map<String, Value>) {
        let mut event = AnalyticsEvent::new("error", "error").label(error_type).property("message", message);
        event.properties.extend(context);
        self.track(event);
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Builds the `context` map for [`Analytics::error`] from `key => value` pairs.
pub fn context<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
}
