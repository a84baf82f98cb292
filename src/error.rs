use std::time::Duration;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reported by an odds source for one polling pass.
///
/// The rate-limit condition is a variant of its own so the runtime can pick
/// the extended backoff without inspecting message text.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("rate limited by odds source")]
    RateLimited { retry_after: Option<Duration> },

    #[error("transient fetch failure: {0}")]
    Transient(String),

    #[error("fatal fetch failure: {0}")]
    Fatal(String),
}

/// Coarse classification used by the polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RateLimited,
    Transient,
    Fatal,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("notification error: {0}")]
    Notify(String),

    #[error("cache store error: {0}")]
    Store(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify this error for the polling loop.
    ///
    /// Configuration errors are fatal; everything else abandons only the
    /// current cycle.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(FetchError::RateLimited { .. }) => ErrorKind::RateLimited,
            Self::Fetch(FetchError::Fatal(_)) | Self::Config(_) => ErrorKind::Fatal,
            _ => ErrorKind::Transient,
        }
    }

    /// Backoff hint supplied by a rate-limited source, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Fetch(FetchError::RateLimited { retry_after }) => *retry_after,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
