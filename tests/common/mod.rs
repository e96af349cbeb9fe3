#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, extract::ConnectInfo, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::Layer;

use click_tracker::api::handlers::{health_handler, missing_token_handler, redirect_handler};
use click_tracker::application::services::RedirectService;
use click_tracker::domain::entities::{
    Campaign, CampaignLink, Click, ErrorLog, NewClick, NewErrorLog,
};
use click_tracker::domain::repositories::{
    CampaignLinkRepository, ClickRepository, ErrorLogRepository,
};
use click_tracker::domain::user_agent::UserAgentConfig;
use click_tracker::error::AppError;
use click_tracker::infrastructure::user_agent::WootheeClassifier;
use click_tracker::state::AppState;
use click_tracker::web;

pub const SESSION_COOKIE: &str = "click_session";

/// Peer address injected by [`MockConnectInfoLayer`].
pub const PEER_IP: &str = "127.0.0.1";

/// In-memory stand-in for the three PostgreSQL repositories.
///
/// Each store can be switched into a failing mode to exercise error paths.
#[derive(Default)]
pub struct InMemoryStore {
    links: Mutex<Vec<CampaignLink>>,
    clicks: Mutex<Vec<NewClick>>,
    error_logs: Mutex<Vec<NewErrorLog>>,
    pub fail_lookups: AtomicBool,
    pub fail_clicks: AtomicBool,
    pub fail_error_logs: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_link(&self, link: CampaignLink) {
        self.links.lock().unwrap().push(link);
    }

    pub fn clicks(&self) -> Vec<NewClick> {
        self.clicks.lock().unwrap().clone()
    }

    pub fn error_logs(&self) -> Vec<NewErrorLog> {
        self.error_logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl CampaignLinkRepository for InMemoryStore {
    async fn find_by_token(&self, link_token: &str) -> Result<Option<CampaignLink>, AppError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(AppError::internal("lookup failed", json!({})));
        }

        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|link| link.link_token == link_token)
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(AppError::internal("store unreachable", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl ClickRepository for InMemoryStore {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        if self.fail_clicks.load(Ordering::SeqCst) {
            return Err(AppError::internal("insert failed", json!({ "table": "clicks" })));
        }

        let mut clicks = self.clicks.lock().unwrap();
        clicks.push(new_click.clone());
        Ok(new_click.into_click(clicks.len() as i64, Utc::now()))
    }
}

#[async_trait]
impl ErrorLogRepository for InMemoryStore {
    async fn record_error(&self, entry: NewErrorLog) -> Result<ErrorLog, AppError> {
        if self.fail_error_logs.load(Ordering::SeqCst) {
            return Err(AppError::internal("insert failed", json!({ "table": "error_logs" })));
        }

        let mut logs = self.error_logs.lock().unwrap();
        logs.push(entry.clone());
        Ok(entry.into_error_log(logs.len() as i64, Utc::now()))
    }
}

pub fn campaign(name: &str) -> Campaign {
    Campaign {
        id: 1,
        campaign_name: name.to_string(),
        status: true,
        end: None,
        utm_activated: true,
        force_lowercase: true,
    }
}

pub fn campaign_link(token: &str, landing_page: &str) -> CampaignLink {
    CampaignLink {
        id: 1,
        link_token: token.to_string(),
        landing_page: landing_page.to_string(),
        source: Some("Newsletter".to_string()),
        medium: None,
        content: None,
        custom_parameters: None,
        campaign: campaign("Summer Sale"),
    }
}

pub fn expired_link(token: &str, end: DateTime<Utc>) -> CampaignLink {
    let mut link = campaign_link(token, "https://shop.example/x");
    link.campaign.end = Some(end);
    link
}

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    let service = RedirectService::new(
        store.clone(),
        store.clone(),
        store,
        Arc::new(WootheeClassifier::new()),
        UserAgentConfig::default(),
    );

    AppState::new(Arc::new(service), false, SESSION_COOKIE)
}

/// Test server with every public route mounted.
pub fn create_test_server(store: Arc<InMemoryStore>) -> TestServer {
    let app = Router::new()
        .route("/", get(missing_token_handler))
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .merge(web::routes::public_routes())
        .layer(MockConnectInfoLayer)
        .with_state(create_test_state(store));

    TestServer::new(app).unwrap()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
