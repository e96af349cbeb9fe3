//! Campaign entity owning a set of tracked links.

use chrono::{DateTime, Utc};

/// A marketing campaign.
///
/// Campaigns are managed by an external admin surface; the tracker only reads
/// them to decide whether a click is trackable and how UTM parameters are
/// rendered.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: i64,
    pub campaign_name: String,
    /// `false` means the campaign was switched off.
    pub status: bool,
    /// Optional expiry. Clicks after this instant are rejected.
    pub end: Option<DateTime<Utc>>,
    pub utm_activated: bool,
    pub force_lowercase: bool,
}

impl Campaign {
    /// Returns true if the campaign accepts clicks (ignoring expiry).
    pub fn is_active(&self) -> bool {
        self.status
    }

    /// Returns true if `now` is strictly after the campaign end.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.end.is_some_and(|end| now > end)
    }
}
