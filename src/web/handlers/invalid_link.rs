//! Invalid link page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the invalid link page.
#[derive(Template, WebTemplate)]
#[template(path = "invalid_link.html")]
struct InvalidLinkTemplate {}

/// Renders the invalid link page.
///
/// # Endpoint
///
/// `GET /error/invalid-link`
///
/// Shown for missing, unknown, inactive and expired links alike.
pub async fn invalid_link_handler() -> impl IntoResponse {
    InvalidLinkTemplate {}
}
