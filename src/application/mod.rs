//! Application layer services implementing the tracking pipeline.
//!
//! Services consume repository and classifier traits and expose an API that
//! knows nothing about HTTP.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Click validation, recording and redirect resolution

pub mod services;
