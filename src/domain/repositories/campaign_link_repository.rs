//! Repository trait for campaign link lookups.

use crate::domain::entities::CampaignLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to campaign links and their owning campaigns.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCampaignLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignLinkRepository: Send + Sync {
    /// Finds a link by exact token match, together with its campaign.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(CampaignLink))` if found
    /// - `Ok(None)` if no link has this token
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_token(&self, link_token: &str) -> Result<Option<CampaignLink>, AppError>;

    /// Verifies that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
