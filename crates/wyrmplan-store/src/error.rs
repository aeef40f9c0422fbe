//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur in the store layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Bundled data error.
    #[error("Data error: {0}")]
    Data(#[from] wyrmplan_data::Error),

    /// An imported build file did not parse as a build list.
    #[error("Import rejected: {0}")]
    ImportParse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
