//! Failure taxonomy for the tracking pipeline.

use super::RedirectOutcome;

/// Message shown to visitors when a click could not be processed.
pub const CLICK_FAILED_MESSAGE: &str = "Failed to process the click. Please try again later.";

/// Reasons a click is not redirected to its landing page.
///
/// None of these escape the pipeline: each is written to the error log and
/// turned into a [`RedirectOutcome`]. The `Display` text is the message
/// stored in the error log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    #[error("Invalid link token provided.")]
    MissingToken,

    #[error("Campaign link not found.")]
    LinkNotFound,

    #[error("Campaign is inactive.")]
    CampaignInactive,

    #[error("Campaign has expired.")]
    CampaignExpired,

    #[error("Failed to look up campaign link.")]
    LookupFailure,

    #[error("Failed to save campaign link click.")]
    PersistenceFailure,

    #[error("Campaign link has an invalid landing page.")]
    InvalidLandingPage,
}

impl TrackingError {
    /// Stable identifier used in logs and the error context.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackingError::MissingToken => "missing_token",
            TrackingError::LinkNotFound => "link_not_found",
            TrackingError::CampaignInactive => "campaign_inactive",
            TrackingError::CampaignExpired => "campaign_expired",
            TrackingError::LookupFailure => "lookup_failure",
            TrackingError::PersistenceFailure => "persistence_failure",
            TrackingError::InvalidLandingPage => "invalid_landing_page",
        }
    }

    /// Maps the failure to the redirect the visitor receives.
    ///
    /// Validation failures are indistinguishable to the visitor; processing
    /// failures get the generic error page.
    pub fn outcome(&self) -> RedirectOutcome {
        match self {
            TrackingError::MissingToken
            | TrackingError::LinkNotFound
            | TrackingError::CampaignInactive
            | TrackingError::CampaignExpired => RedirectOutcome::InvalidLink,
            TrackingError::LookupFailure
            | TrackingError::PersistenceFailure
            | TrackingError::InvalidLandingPage => RedirectOutcome::ErrorPage {
                message: CLICK_FAILED_MESSAGE.to_string(),
            },
        }
    }
}
