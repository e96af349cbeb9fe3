//! Utility functions for parameter merging, URL building and request handling.
//!
//! - [`tracking_params`] - UTM / custom parameter construction and merging
//! - [`landing_url`] - Landing page URL reconstruction
//! - [`client_ip`] - Client IP extraction from peer address and proxy headers
//! - [`session`] - Session cookie parsing and generation

pub mod client_ip;
pub mod landing_url;
pub mod session;
pub mod tracking_params;
