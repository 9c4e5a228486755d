//! Error types for grantdesk.
//!
//! This module defines all error types used throughout the grantdesk crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for grantdesk operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to open the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// The database file does not exist.
    ///
    /// The schema is owned by the deployment; `grantdesk db init` creates
    /// it explicitly for fresh installations.
    #[error("database not found at {path}; run `grantdesk db init` to create it")]
    DatabaseMissing {
        /// Path that was checked.
        path: PathBuf,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Opener Errors ===
    /// Failed to materialize an attachment to a temporary file.
    #[error("failed to write attachment to {path}: {source}")]
    TempWrite {
        /// Destination that couldn't be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The platform launcher failed to open a materialized file.
    #[error("failed to open {path}: {message}")]
    Launch {
        /// Path that was handed to the launcher.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    /// The open pipeline did not complete within the configured bound.
    #[error("opening '{label}' timed out after {seconds}s")]
    LaunchTimeout {
        /// Document label that was being opened.
        label: String,
        /// The configured bound in seconds.
        seconds: u64,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for grantdesk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new launch error.
    #[must_use]
    pub fn launch(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Launch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error came from the open pipeline (launch or timeout).
    ///
    /// The presentation shell renders these as dismissible notifications
    /// rather than hard failures.
    #[must_use]
    pub fn is_launch_error(&self) -> bool {
        matches!(
            self,
            Self::Launch { .. } | Self::LaunchTimeout { .. } | Self::TempWrite { .. }
        )
    }

    /// Check if this error is a store fault.
    #[must_use]
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. } | Self::DatabaseQuery(_) | Self::DatabaseMissing { .. }
        )
    }
}
