//! Core domain entities representing the tracking data model.
//!
//! # Entity Types
//!
//! - [`Campaign`] - A marketing campaign (read-only here)
//! - [`CampaignLink`] - A tokenized link with its landing page and UTM fields
//! - [`Click`] - One tracked click on a campaign link
//! - [`ErrorLog`] - A diagnostic record for a click that could not be tracked
//!
//! # Design Pattern
//!
//! Append-only entities have a separate struct for creation
//! (`NewClick`, `NewErrorLog`); identifiers and timestamps are assigned by the store.

pub mod campaign;
pub mod campaign_link;
pub mod click;
pub mod error_log;

pub use campaign::Campaign;
pub use campaign_link::CampaignLink;
pub use click::{Click, NewClick};
pub use error_log::{ErrorLog, NewErrorLog};
