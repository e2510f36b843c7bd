use std::fmt;

use serde::Serialize;

/// Output language of the copy.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Kannada,
    Telugu,
    Marathi,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Kannada,
        Language::Telugu,
        Language::Marathi,
    ];

    /// Case-insensitive; anything unrecognised is English.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Tamil => "tamil",
            Language::Kannada => "kannada",
            Language::Telugu => "telugu",
            Language::Marathi => "marathi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persuasion angle the copy leans on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Fomo,
    Urgency,
    Exclusivity,
    #[default]
    Value,
    Trust,
    Community,
}

impl Theme {
    pub const ALL: [Theme; 6] =
        [Theme::Fomo, Theme::Urgency, Theme::Exclusivity, Theme::Value, Theme::Trust, Theme::Community];

    /// Case-insensitive; anything unrecognised is [`Theme::Value`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Fomo => "fomo",
            Theme::Urgency => "urgency",
            Theme::Exclusivity => "exclusivity",
            Theme::Value => "value",
            Theme::Trust => "trust",
            Theme::Community => "community",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_LOB: &str = "auto";

/// What the user asked for: a topic plus language, theme and insurance line
/// of business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyRequest {
    pub topic: String,
    pub language: Language,
    pub theme: Theme,
    pub lob: String,
}

impl CopyRequest {
    /// Blank `lob` becomes [`DEFAULT_LOB`].
    pub fn new(topic: impl Into<String>, language: Language, theme: Theme, lob: &str) -> Self {
        let lob = lob.trim();
        Self {
            topic: topic.into(),
            language,
            theme,
            lob: if lob.is_empty() { DEFAULT_LOB.to_owned() } else { lob.to_ascii_lowercase() },
        }
    }

    /// Requests that differ only in topic case or surrounding whitespace share a key.
    pub fn cache_key(&self) -> String {
        format!(
            "copy:{}:{}:{}:{}",
            self.lob,
            self.language,
            self.theme,
            self.topic.trim().to_lowercase()
        )
    }
}
