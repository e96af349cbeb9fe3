//! Repository trait for the tracking error log.

use crate::domain::entities::{ErrorLog, NewErrorLog};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only storage for diagnostic error records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorLogRepository: Send + Sync {
    /// Records a new error log entry.
    ///
    /// Callers treat failures as non-fatal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn record_error(&self, entry: NewErrorLog) -> Result<ErrorLog, AppError>;
}
