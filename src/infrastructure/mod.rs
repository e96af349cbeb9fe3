//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`user_agent`] - User-agent classifier backed by `woothee`

pub mod persistence;
pub mod user_agent;
