//! Error log entity recording rejected or failed clicks.

use chrono::{DateTime, Utc};

/// A diagnostic record written whenever a click cannot be tracked.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    pub id: i64,
    pub link_token: Option<String>,
    pub error_message: String,
    /// JSON snapshot of the failure context (kind, stage, backtrace).
    pub stack_context: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a new error log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewErrorLog {
    /// `None` when the request carried no usable token.
    pub link_token: Option<String>,
    pub error_message: String,
    pub stack_context: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl NewErrorLog {
    pub fn into_error_log(self, id: i64, created_at: DateTime<Utc>) -> ErrorLog {
        ErrorLog {
            id,
            link_token: self.link_token,
            error_message: self.error_message,
            stack_context: self.stack_context,
            ip: self.ip,
            user_agent: self.user_agent,
            created_at,
        }
    }
}
