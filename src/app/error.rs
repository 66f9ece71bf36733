use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AdventusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rate limiter state error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdventusError>;
