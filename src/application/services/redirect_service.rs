//! Click tracking and redirect resolution.

use std::backtrace::Backtrace;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, error, instrument, warn};

use crate::domain::entities::{CampaignLink, NewClick, NewErrorLog};
use crate::domain::repositories::{CampaignLinkRepository, ClickRepository, ErrorLogRepository};
use crate::domain::user_agent::{UserAgentClassifier, UserAgentConfig, UserAgentInfo};
use crate::domain::{ClickRequest, RedirectOutcome, TrackingError};
use crate::utils::landing_url::build_landing_url;
use crate::utils::tracking_params::merge_params;

/// Pipeline step at which a click was rejected.
#[derive(Debug, Clone, Copy)]
enum Stage {
    TokenValidation,
    LinkLookup,
    CampaignCheck,
    ClickPersistence,
    UrlReconstruction,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::TokenValidation => "token_validation",
            Stage::LinkLookup => "link_lookup",
            Stage::CampaignCheck => "campaign_check",
            Stage::ClickPersistence => "click_persistence",
            Stage::UrlReconstruction => "url_reconstruction",
        }
    }
}

/// A rejected click together with its diagnostic context.
#[derive(Debug)]
struct Rejection {
    error: TrackingError,
    stage: Stage,
    detail: Option<String>,
}

impl Rejection {
    fn new(error: TrackingError, stage: Stage) -> Self {
        Self {
            error,
            stage,
            detail: None,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Service resolving a click token to its landing page.
///
/// # Pipeline
///
/// 1. Validate the token
/// 2. Look up the campaign link and its campaign
/// 3. Reject inactive or expired campaigns
/// 4. Classify the user agent
/// 5. Record the click
/// 6. Merge inbound, UTM and custom parameters
/// 7. Rebuild the landing page URL
///
/// Every failure is written to the error log and mapped to a
/// [`RedirectOutcome`]; `handle` itself never fails.
pub struct RedirectService {
    links: Arc<dyn CampaignLinkRepository>,
    clicks: Arc<dyn ClickRepository>,
    error_logs: Arc<dyn ErrorLogRepository>,
    classifier: Arc<dyn UserAgentClassifier>,
    ua_config: UserAgentConfig,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        links: Arc<dyn CampaignLinkRepository>,
        clicks: Arc<dyn ClickRepository>,
        error_logs: Arc<dyn ErrorLogRepository>,
        classifier: Arc<dyn UserAgentClassifier>,
        ua_config: UserAgentConfig,
    ) -> Self {
        Self {
            links,
            clicks,
            error_logs,
            classifier,
            ua_config,
        }
    }

    /// Handles one inbound click.
    ///
    /// A click is recorded only for an existing link of an active,
    /// non-expired campaign. Each call records at most one click; repeated
    /// identical requests record one click each.
    #[instrument(skip_all, fields(token = %request.token))]
    pub async fn handle(&self, request: ClickRequest) -> RedirectOutcome {
        match self.track(&request).await {
            Ok(url) => {
                debug!(target_url = %url, "Redirecting click to landing page");
                RedirectOutcome::LandingPage(url)
            }
            Err(rejection) => {
                let outcome = rejection.error.outcome();
                self.record_rejection(&request, rejection).await;
                outcome
            }
        }
    }

    /// Verifies that the link store is reachable.
    pub async fn check_store(&self) -> Result<(), crate::error::AppError> {
        self.links.ping().await
    }

    async fn track(&self, request: &ClickRequest) -> Result<String, Rejection> {
        let token = request
            .token()
            .ok_or_else(|| Rejection::new(TrackingError::MissingToken, Stage::TokenValidation))?;

        let link = match self.links.find_by_token(token).await {
            Ok(Some(link)) => link,
            Ok(None) => {
                return Err(Rejection::new(TrackingError::LinkNotFound, Stage::LinkLookup));
            }
            Err(e) => {
                return Err(Rejection::new(TrackingError::LookupFailure, Stage::LinkLookup)
                    .with_detail(e.to_string()));
            }
        };

        let campaign = &link.campaign;
        if !campaign.is_active() {
            return Err(Rejection::new(
                TrackingError::CampaignInactive,
                Stage::CampaignCheck,
            ));
        }
        if campaign.is_expired_at(Utc::now()) {
            return Err(Rejection::new(
                TrackingError::CampaignExpired,
                Stage::CampaignCheck,
            ));
        }

        let user_agent = self.classify(request);
        let new_click = build_click(token, request, user_agent);

        if let Err(e) = self.clicks.record_click(new_click).await {
            error!(error = %e, code = e.code(), "Failed to save campaign link click");
            return Err(
                Rejection::new(TrackingError::PersistenceFailure, Stage::ClickPersistence)
                    .with_detail(e.to_string()),
            );
        }

        landing_url(&link, request).map_err(|detail| {
            Rejection::new(TrackingError::InvalidLandingPage, Stage::UrlReconstruction)
                .with_detail(detail)
        })
    }

    fn classify(&self, request: &ClickRequest) -> UserAgentInfo {
        match request.user_agent.as_deref() {
            Some(ua) => self.classifier.classify(ua, &self.ua_config),
            None => UserAgentInfo::default(),
        }
    }

    /// Writes the error log entry for a rejected click.
    ///
    /// Failures to write are logged and swallowed.
    async fn record_rejection(&self, request: &ClickRequest, rejection: Rejection) {
        let Rejection {
            error,
            stage,
            detail,
        } = rejection;

        warn!(
            kind = error.kind(),
            stage = stage.as_str(),
            "Click rejected: {}",
            error
        );

        let stack_context = json!({
            "kind": error.kind(),
            "stage": stage.as_str(),
            "detail": detail,
            "backtrace": Backtrace::force_capture().to_string(),
        })
        .to_string();

        let entry = NewErrorLog {
            link_token: request.token().map(str::to_string),
            error_message: error.to_string(),
            stack_context,
            ip: request.ip.clone(),
            user_agent: request.user_agent.clone(),
        };

        if let Err(e) = self.error_logs.record_error(entry).await {
            warn!(error = %e, kind = error.kind(), "Failed to write error log entry");
        }
    }
}

fn build_click(token: &str, request: &ClickRequest, user_agent: UserAgentInfo) -> NewClick {
    NewClick {
        link_token: token.to_string(),
        user_agent: request.user_agent.clone(),
        referrer: request.referer.clone(),
        ip: request.ip.clone(),
        platform: user_agent.os_name,
        browser: user_agent.browser_name,
        device_type: user_agent.device_type,
        screen_resolution: request.screen_resolution.clone(),
        language: request.language.clone(),
        session_id: request.session_id.clone(),
    }
}

fn landing_url(link: &CampaignLink, request: &ClickRequest) -> Result<String, String> {
    let params = merge_params(&request.query, link);
    build_landing_url(&link.landing_page, &params).map_err(|e| e.to_string())
}
