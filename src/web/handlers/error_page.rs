//! Generic error page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::RawQuery;
use axum::response::IntoResponse;
use url::form_urlencoded;

use crate::domain::CLICK_FAILED_MESSAGE;

/// Messages the error page is willing to display.
///
/// Anything else in the query string is replaced by the default message, so
/// the page cannot be used to show arbitrary text on this domain.
const KNOWN_MESSAGES: &[&str] = &[CLICK_FAILED_MESSAGE];

/// Template for the error page.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    message: &'static str,
}

/// Renders the error page.
///
/// # Endpoint
///
/// `GET /error?message=...`
///
/// `message` selects one of the tracker's own messages; unknown, blank or
/// absent values fall back to the default click failure message.
pub async fn error_page_handler(RawQuery(query): RawQuery) -> impl IntoResponse {
    ErrorPageTemplate {
        message: message_from_query(query.as_deref()),
    }
}

fn message_from_query(query: Option<&str>) -> &'static str {
    query
        .and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "message")
                .map(|(_, value)| value.into_owned())
        })
        .and_then(|requested| {
            KNOWN_MESSAGES
                .iter()
                .copied()
                .find(|known| *known == requested.trim())
        })
        .unwrap_or(CLICK_FAILED_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_message_is_shown() {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("message", CLICK_FAILED_MESSAGE)
            .finish();

        assert_eq!(message_from_query(Some(&query)), CLICK_FAILED_MESSAGE);
    }

    #[test]
    fn test_message_defaults() {
        assert_eq!(message_from_query(None), CLICK_FAILED_MESSAGE);
        assert_eq!(message_from_query(Some("message=")), CLICK_FAILED_MESSAGE);
        assert_eq!(message_from_query(Some("other=x")), CLICK_FAILED_MESSAGE);
    }

    #[test]
    fn test_unknown_message_is_not_rendered() {
        assert_eq!(
            message_from_query(Some("message=Your+account+is+locked.+Call+555-0100")),
            CLICK_FAILED_MESSAGE
        );
    }
}
