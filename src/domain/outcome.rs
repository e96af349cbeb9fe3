//! Result of handling one click.

/// Where the browser should be sent after a click was handled.
///
/// Every branch of the tracking pipeline ends in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// The token could not be tracked (missing, unknown, inactive, expired).
    InvalidLink,
    /// Processing failed after validation; `message` is safe to show to the visitor.
    ErrorPage { message: String },
    /// The fully parameterized landing page URL.
    LandingPage(String),
}

impl RedirectOutcome {
    pub fn is_landing_page(&self) -> bool {
        matches!(self, RedirectOutcome::LandingPage(_))
    }
}
