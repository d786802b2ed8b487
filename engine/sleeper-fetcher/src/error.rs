//! Error types for the Sleeper fetcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Sleeper API error: {message}")]
    SleeperApi { message: String },

    #[error("No data found at {url}")]
    NotFound { url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
