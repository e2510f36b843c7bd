use std::fmt;

/// Why a copy-service response could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum CopyError {
    /// The source could not be reached; worth retrying.
    Transport(String),
    /// The source answered with an error.
    Provider(String),
    /// No `{ ... }` object anywhere in the output.
    NoJson,
    InvalidJson(String),
    TooFewBanners { found: usize, required: usize },
}

impl CopyError {
    pub fn is_transient(&self) -> bool {
        matches!(self, CopyError::Transport(_))
    }

    /// Short machine-readable kind, used as the analytics label.
    pub fn kind(&self) -> &'static str {
        match self {
            CopyError::Transport(_) => "transport",
            CopyError::Provider(_) => "provider",
            CopyError::NoJson => "no_json",
            CopyError::InvalidJson(_) => "invalid_json",
            CopyError::TooFewBanners { .. } => "too_few_banners",
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::Transport(msg) => write!(f, "copy source unreachable: {msg}"),
            CopyError::Provider(msg) => write!(f, "copy source error: {msg}"),
            CopyError::NoJson => write!(f, "copy response contains no JSON object"),
            CopyError::InvalidJson(msg) => write!(f, "copy response is not valid banner JSON: {msg}"),
            CopyError::TooFewBanners { found, required } => {
                write!(f, "copy response has {found} banners, need at least {required}")
            }
        }
    }
}

impl std::error::Error for CopyError {}
