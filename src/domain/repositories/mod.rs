//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the data store behind the click tracker. Concrete
//! implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CampaignLinkRepository`] - Token lookups (read-only)
//! - [`ClickRepository`] - Click inserts (append-only)
//! - [`ErrorLogRepository`] - Error log inserts (append-only)

pub mod campaign_link_repository;
pub mod click_repository;
pub mod error_log_repository;

pub use campaign_link_repository::CampaignLinkRepository;
pub use click_repository::ClickRepository;
pub use error_log_repository::ErrorLogRepository;

#[cfg(test)]
pub use campaign_link_repository::MockCampaignLinkRepository;
#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use error_log_repository::MockErrorLogRepository;
