//! Infrastructure-level error type shared by repositories.
//!
//! Tracking failures that end a click (unknown token, inactive campaign, ...)
//! are modelled separately by [`crate::domain::TrackingError`]; `AppError`
//! only describes why a collaborator call failed.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Internal { message: String, details: Value },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Short machine-readable label, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Internal { .. } => "internal_error",
            AppError::Database(_) => "database_error",
        }
    }
}
