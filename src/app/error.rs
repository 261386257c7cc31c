use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum KackerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Display container not found: #{0}")]
    ContainerNotFound(String),

    #[error("Invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, KackerError>;
