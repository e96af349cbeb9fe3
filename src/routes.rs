//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{token}`              - Tracked click redirect
//! - `GET  /`                     - Request without token (invalid link)
//! - `GET  /health`               - Health check
//! - `GET  /error/invalid-link`   - Invalid link page
//! - `GET  /error`                - Generic error page
//!
//! Static routes take precedence over `/{token}`, so tokens equal to
//! `health` or `error` are unreachable.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, missing_token_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(missing_token_handler))
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .merge(web::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::RedirectService;
    use crate::domain::repositories::{
        MockCampaignLinkRepository, MockClickRepository, MockErrorLogRepository,
    };
    use crate::domain::user_agent::{MockUserAgentClassifier, UserAgentConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let mut links = MockCampaignLinkRepository::new();
        links.expect_ping().returning(|| Ok(()));

        let service = RedirectService::new(
            Arc::new(links),
            Arc::new(MockClickRepository::new()),
            Arc::new(MockErrorLogRepository::new()),
            Arc::new(MockUserAgentClassifier::new()),
            UserAgentConfig::default(),
        );

        AppState::new(Arc::new(service), false, "click_session")
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let app = app_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_pages_are_routed() {
        let app = app_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/error/invalid-link")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
