//! Error types for TUI

use thiserror::Error;

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur in the TUI
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Application error
    #[error("Application error: {0}")]
    Application(String),
}

impl From<booknest_core::AppError> for TuiError {
    fn from(err: booknest_core::AppError) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<booknest_catalog::CatalogError> for TuiError {
    fn from(err: booknest_catalog::CatalogError) -> Self {
        Self::Database(err.to_string())
    }
}
