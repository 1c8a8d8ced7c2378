use thiserror::Error;

use crate::section::SectionType;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} section type not found in event response")]
    MissingSection(SectionType),

    #[error("no location known for {0} section, fetch the event first")]
    SectionNotFetched(SectionType),
}

impl FetchError {
    pub fn transport(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        FetchError::Transport {
            url: url.into(),
            message: err.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. } | FetchError::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FetchError::MissingSection(_))
    }

    /// A section was requested before the event fetch recorded where it lives.
    pub fn is_ordering(&self) -> bool {
        matches!(self, FetchError::SectionNotFetched(_))
    }
}
