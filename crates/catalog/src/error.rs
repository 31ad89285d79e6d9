use booknest_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] AppError),
}

impl CatalogError {
    /// Returns a user-friendly message suitable for the status line
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(err) => err.user_message(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
