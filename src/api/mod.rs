//! HTTP layer for the tracking endpoint.
//!
//! Translates requests into [`crate::domain::ClickRequest`] values and
//! outcomes back into redirects.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
