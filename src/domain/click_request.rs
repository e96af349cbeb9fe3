//! Transport-independent description of an inbound click.

/// Everything the tracker needs to know about one inbound request.
///
/// Built by the HTTP handler from the path, query string, headers and peer
/// address, so that [`crate::application::services::RedirectService`] never
/// touches framework types.
///
/// All header-derived fields are optional; absent headers are recorded as
/// `NULL` rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct ClickRequest {
    /// Path token. May be empty when the request had no token at all.
    pub token: String,
    /// Inbound query parameters in their original order.
    pub query: Vec<(String, String)>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip: Option<String>,
    /// Value of the non-standard `screen-resolution` header.
    pub screen_resolution: Option<String>,
    /// Value of the `Accept-Language` header.
    pub language: Option<String>,
    pub session_id: Option<String>,
}

impl ClickRequest {
    #[cfg(test)]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Returns the token unchanged, or `None` when it is empty or blank.
    pub fn token(&self) -> Option<&str> {
        (!self.token.trim().is_empty()).then_some(self.token.as_str())
    }
}
