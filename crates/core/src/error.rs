//! Error types for BookNest
//!
//! Errors carry a severity tier:
//! - **Recoverable**: transient, the same operation may succeed if reissued
//! - **Degraded**: the action failed but the app continues normally
//! - **Fatal**: the app cannot do useful work (corrupted store, bad migration)
//!
//! No error triggers an automatic retry; the surface decides what to show.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Transient; reissuing the operation may succeed
    Recoverable,
    /// The action failed but the app can continue
    Degraded,
    /// Critical error requiring restart or user action
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable => write!(f, "Recoverable"),
            Self::Degraded => write!(f, "Degraded"),
            Self::Fatal => write!(f, "Fatal"),
        }
    }
}

/// Main error type for BookNest
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {message}")]
    DatabaseError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Database is locked by another process
    #[error("Database locked: {operation}")]
    DatabaseLocked { operation: String },

    /// Database migration failed
    #[error("Migration failed: {version} - {reason}")]
    MigrationFailed { version: String, reason: String },

    /// Record not found in database
    #[error("Record not found: {entity} with id {identifier}")]
    RecordNotFound { entity: String, identifier: String },

    /// Input rejected before reaching the store
    #[error("Validation failed: {field} - {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Configuration file corrupted
    #[error("Configuration corrupted: {path}")]
    ConfigurationCorrupted { path: PathBuf },

    /// General I/O error
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Generic internal error
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl AppError {
    /// Returns the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DatabaseLocked { .. } => ErrorSeverity::Recoverable,

            Self::DatabaseError { .. }
            | Self::RecordNotFound { .. }
            | Self::ValidationFailed { .. }
            | Self::IoError { .. }
            | Self::InternalError { .. } => ErrorSeverity::Degraded,

            Self::MigrationFailed { .. } | Self::ConfigurationCorrupted { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    /// Returns a user-friendly message suitable for the status line
    pub fn user_message(&self) -> String {
        match self {
            Self::DatabaseError { .. } | Self::DatabaseLocked { .. } => {
                "The library database is unavailable. Please try again.".to_string()
            }
            Self::MigrationFailed { .. } => {
                "Failed to update the library database.".to_string()
            }
            Self::RecordNotFound { .. } => "The requested book was not found.".to_string(),
            Self::ValidationFailed { field, reason } => {
                format!("{}: {}", field, reason)
            }
            Self::ConfigurationCorrupted { .. } => {
                "Settings are corrupted; defaults are in effect.".to_string()
            }
            Self::IoError { .. } => "A file operation failed. Please try again.".to_string(),
            Self::InternalError { .. } => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }

    /// Returns true if this error should be logged at ERROR level
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Fatal
    }

    /// Helper to create a database error from any error type
    pub fn database<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::DatabaseError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Helper to create a validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}
