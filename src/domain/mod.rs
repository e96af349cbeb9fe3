//! Domain layer containing tracking entities and contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository and classifier traits define the contracts implemented
//! by `crate::infrastructure`.
//!
//! # Architecture
//!
//! - [`entities`] - Campaigns, links, clicks and error logs
//! - [`repositories`] - Data access trait definitions
//! - [`click_request`] - Transport-independent inbound click
//! - [`outcome`] - Where a handled click redirects to
//! - [`tracking_error`] - Why a click was not tracked
//! - [`user_agent`] - User-agent classifier contract
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler builds a [`ClickRequest`]
//! 2. [`crate::application::services::RedirectService`] validates, records and merges
//! 3. The resulting [`RedirectOutcome`] is turned back into an HTTP redirect

pub mod click_request;
pub mod entities;
pub mod outcome;
pub mod repositories;
pub mod tracking_error;
pub mod user_agent;

pub use click_request::ClickRequest;
pub use outcome::RedirectOutcome;
pub use tracking_error::{CLICK_FAILED_MESSAGE, TrackingError};
