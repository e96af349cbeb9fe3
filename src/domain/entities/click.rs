//! Click entity representing a single tracked visit.

use chrono::{DateTime, Utc};

/// A persisted click on a campaign link.
///
/// Captures visitor telemetry (device, browser, referrer, session) for one
/// inbound request. Clicks are append-only.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_token: String,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
    pub platform: Option<String>,
    pub browser: Option<String>,
    pub device_type: Option<String>,
    pub screen_resolution: Option<String>,
    pub language: Option<String>,
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a new click.
///
/// The identifier and timestamp are assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClick {
    pub link_token: String,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub ip: Option<String>,
    pub platform: Option<String>,
    pub browser: Option<String>,
    pub device_type: Option<String>,
    pub screen_resolution: Option<String>,
    pub language: Option<String>,
    pub session_id: Option<String>,
}

impl NewClick {
    /// Materializes the click with store-assigned fields.
    pub fn into_click(self, id: i64, created_at: DateTime<Utc>) -> Click {
        Click {
            id,
            link_token: self.link_token,
            user_agent: self.user_agent,
            referrer: self.referrer,
            ip: self.ip,
            platform: self.platform,
            browser: self.browser,
            device_type: self.device_type,
            screen_resolution: self.screen_resolution,
            language: self.language,
            session_id: self.session_id,
            created_at,
        }
    }
}
