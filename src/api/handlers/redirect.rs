//! Handler for tracked click redirects.

use axum::{
    extract::{ConnectInfo, Path, RawQuery, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use url::form_urlencoded;

use crate::domain::{ClickRequest, RedirectOutcome};
use crate::state::AppState;
use crate::utils::client_ip::client_ip;
use crate::utils::session::{generate_session_id, read_session_cookie, session_cookie_header};
use crate::web::routes::{ERROR_PAGE_PATH, INVALID_LINK_PATH};

/// Non-standard header some landing scripts send with the visitor's screen size.
const SCREEN_RESOLUTION: &str = "screen-resolution";

/// Tracks a click and redirects to the campaign landing page.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Request Flow
///
/// 1. Build a [`ClickRequest`] from path, query string, headers and peer address
/// 2. Resolve the session id from the session cookie (or mint one)
/// 3. Run the tracking pipeline
/// 4. Return `302 Found` to the landing page, the invalid-link page or the error page
///
/// All inbound query parameters are forwarded to the landing page.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    track_click(&state, token, query, &headers, addr).await
}

/// Handles `GET /`, a tracking request without a token.
///
/// Always ends on the invalid-link page, after logging the missing token.
pub async fn missing_token_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    track_click(&state, String::new(), query, &headers, addr).await
}

async fn track_click(
    state: &AppState,
    token: String,
    query: Option<String>,
    headers: &HeaderMap,
    addr: SocketAddr,
) -> Response {
    let (session_id, minted) = match read_session_cookie(headers, &state.session_cookie_name) {
        Some(id) => (id, false),
        None => (generate_session_id(), true),
    };

    let request = ClickRequest {
        token,
        query: parse_query(query.as_deref()),
        user_agent: header_value(headers, header::USER_AGENT.as_str()),
        referer: header_value(headers, header::REFERER.as_str()),
        ip: client_ip(headers, Some(addr), state.behind_proxy),
        screen_resolution: header_value(headers, SCREEN_RESOLUTION),
        language: header_value(headers, header::ACCEPT_LANGUAGE.as_str()),
        session_id: Some(session_id.clone()),
    };

    let outcome = state.redirect_service.handle(request).await;

    let set_cookie =
        minted.then(|| session_cookie_header(&state.session_cookie_name, &session_id));

    redirect_response(&outcome, set_cookie)
}

/// Decodes the raw query string into ordered key/value pairs.
fn parse_query(query: Option<&str>) -> Vec<(String, String)> {
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Maps an outcome to its `Location` target.
pub fn outcome_location(outcome: &RedirectOutcome) -> String {
    match outcome {
        RedirectOutcome::InvalidLink => INVALID_LINK_PATH.to_string(),
        RedirectOutcome::ErrorPage { message } => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("message", message)
                .finish();
            format!("{ERROR_PAGE_PATH}?{query}")
        }
        RedirectOutcome::LandingPage(url) => url.clone(),
    }
}

fn redirect_response(outcome: &RedirectOutcome, set_cookie: Option<String>) -> Response {
    let mut response = (
        StatusCode::FOUND,
        [
            (header::LOCATION, outcome_location(outcome)),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
    )
        .into_response();

    if let Some(cookie) = set_cookie
        && let Ok(value) = HeaderValue::from_str(&cookie)
    {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }

    response
}
