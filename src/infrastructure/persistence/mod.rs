//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgCampaignLinkRepository`] - Campaign link lookups
//! - [`PgClickRepository`] - Click inserts
//! - [`PgErrorLogRepository`] - Error log inserts

pub mod pg_campaign_link_repository;
pub mod pg_click_repository;
pub mod pg_error_log_repository;

pub use pg_campaign_link_repository::PgCampaignLinkRepository;
pub use pg_click_repository::PgClickRepository;
pub use pg_error_log_repository::PgErrorLogRepository;
