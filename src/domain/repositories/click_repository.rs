//! Repository trait for click persistence.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only storage for tracked clicks.
///
/// No deduplication: every call inserts a new record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a new click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;
}
