//! Error types for wyrmplan-data

use thiserror::Error;

/// Data loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No data source registered for monster: {0}")]
    MissingSource(String),

    #[error("Invalid bundled table `{table}`: {source}")]
    InvalidTable {
        table: &'static str,
        source: serde_json::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
