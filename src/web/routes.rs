//! Public page routes the tracker redirects to.

use crate::state::AppState;
use crate::web::handlers::{error_page_handler, invalid_link_handler};
use axum::{Router, routing::get};

/// Target for clicks that cannot be tracked.
pub const INVALID_LINK_PATH: &str = "/error/invalid-link";

/// Target for clicks that failed during processing.
pub const ERROR_PAGE_PATH: &str = "/error";

/// Static pages.
///
/// # Endpoints
///
/// - `GET /error/invalid-link` - Invalid link page
/// - `GET /error?message=...` - Generic error page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(INVALID_LINK_PATH, get(invalid_link_handler))
        .route(ERROR_PAGE_PATH, get(error_page_handler))
}
