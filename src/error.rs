//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Record not found
    #[error("{0}")]
    NotFound(String),

    /// Record exists but the requested change is not allowed
    #[error("{0}")]
    Conflict(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error with message
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Whether this error means the record is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error means the record exists but the operation was refused.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
