//! Landing page URL reconstruction.

use url::Url;
use url::form_urlencoded;

use super::tracking_params::ParamSet;

/// Errors that can occur while building the outbound landing page URL.
#[derive(Debug, thiserror::Error)]
pub enum LandingUrlError {
    #[error("Invalid landing page URL: {0}")]
    InvalidFormat(String),

    #[error("Landing page URL cannot carry query parameters")]
    CannotBeABase,
}

/// Appends tracking parameters to a landing page URL.
///
/// # Rules
///
/// 1. Scheme, credentials, host, port, path and fragment are preserved
/// 2. Existing landing page parameters come first, byte-for-byte as written
/// 3. An existing parameter is dropped when `params` carries the same key
/// 4. `params` follow in their merged order, form-encoded
/// 5. No `?` is emitted when the final parameter list is empty
///
/// # Errors
///
/// Returns [`LandingUrlError::InvalidFormat`] when `landing_page` is not an
/// absolute URL, and [`LandingUrlError::CannotBeABase`] for URLs such as
/// `mailto:` that have no hierarchical path.
///
/// # Examples
///
/// ```ignore
/// let params: ParamSet = vec![("foo".into(), "bar".into())].into_iter().collect();
/// assert_eq!(
///     build_landing_url("https://shop.example/x?ref=1#top", &params).unwrap(),
///     "https://shop.example/x?ref=1&foo=bar#top"
/// );
/// ```
pub fn build_landing_url(landing_page: &str, params: &ParamSet) -> Result<String, LandingUrlError> {
    let mut url =
        Url::parse(landing_page.trim()).map_err(|e| LandingUrlError::InvalidFormat(e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(LandingUrlError::CannotBeABase);
    }

    let mut segments: Vec<String> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|segment| !segment.is_empty() && !params.contains_key(&segment_key(segment)))
        .map(str::to_string)
        .collect();

    let merged = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    if !merged.is_empty() {
        segments.push(merged);
    }

    if segments.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&segments.join("&")));
    }

    Ok(url.into())
}

/// Decoded key of a raw `key=value` query segment.
fn segment_key(segment: &str) -> String {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}
