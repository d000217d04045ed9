//! Error types for the rota library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for store, configuration and state operations.
///
/// Delivery failures are deliberately not part of this enum: they are
/// reported through [`crate::messenger::ProviderError`] and absorbed by the
/// notifier per recipient.
#[derive(Error, Debug)]
pub enum RotaError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Missing or malformed configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A persisted value could not be interpreted
    #[error("Invalid stored value for '{key}': {reason}")]
    InvalidState { key: String, reason: String },
    /// Calendar arithmetic or time zone errors
    #[error("Time error: {source}")]
    Time {
        #[from]
        source: jiff::Error,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RotaError {
        RotaError::Database {
            message: self.message,
            source,
        }
    }
}

impl RotaError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an error for a persisted value that failed to parse.
    pub fn invalid_state(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RotaError::database(message).with_source(e))
    }
}

/// Result type alias for rota operations
pub type Result<T> = std::result::Result<T, RotaError>;
