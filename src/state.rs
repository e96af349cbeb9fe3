//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RedirectService;

#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    /// Trust `X-Forwarded-For` / `X-Real-IP` for the client address.
    pub behind_proxy: bool,
    pub session_cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(
        redirect_service: Arc<RedirectService>,
        behind_proxy: bool,
        session_cookie_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            redirect_service,
            behind_proxy,
            session_cookie_name: session_cookie_name.into(),
        }
    }
}
