//! Tracking parameter construction and merging.
//!
//! Outbound query parameters are assembled in three layers, each overriding
//! the previous one on key collision:
//!
//! 1. inbound query parameters of the click
//! 2. UTM parameters derived from the campaign and link (when enabled)
//! 3. custom parameters configured on the link

use std::collections::HashMap;

use crate::domain::entities::CampaignLink;

/// Ordered set of query parameters with last-write-wins semantics.
///
/// Re-inserting an existing key replaces its value but keeps the key at the
/// position where it was first seen. Lookups go through a key index, so
/// building a set from `n` inbound parameters is linear in `n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    pairs: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.pairs[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.pairs.len());
                self.pairs.push((key, value));
            }
        }
    }

    /// Overlays `other` on top of `self`.
    pub fn merge(&mut self, other: ParamSet) {
        for (key, value) in other.pairs {
            self.insert(key, value);
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.pairs[position].1.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl FromIterator<(String, String)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = ParamSet::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Formats a UTM value: spaces become underscores, optionally lowercased.
fn format_utm_value(value: &str, force_lowercase: bool) -> String {
    let value = value.replace(' ', "_");
    if force_lowercase {
        value.to_lowercase()
    } else {
        value
    }
}

/// Builds the UTM parameters for a link.
///
/// Returns an empty set when the campaign has UTM tagging disabled. A key is
/// omitted when its source field is absent or empty.
///
/// | Key            | Source                   |
/// |----------------|--------------------------|
/// | `utm_campaign` | campaign `campaign_name` |
/// | `utm_source`   | link `source`            |
/// | `utm_medium`   | link `medium`            |
/// | `utm_content`  | link `content`           |
pub fn utm_params(link: &CampaignLink) -> ParamSet {
    let campaign = &link.campaign;
    let mut params = ParamSet::new();

    if !campaign.utm_activated {
        return params;
    }

    let fields = [
        ("utm_campaign", Some(campaign.campaign_name.as_str())),
        ("utm_source", link.source.as_deref()),
        ("utm_medium", link.medium.as_deref()),
        ("utm_content", link.content.as_deref()),
    ];

    for (key, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            params.insert(key, format_utm_value(value, campaign.force_lowercase));
        }
    }

    params
}

/// Parses a link's custom parameter string.
///
/// The input is a comma-separated list of `key=value` pairs. All whitespace
/// is stripped from keys and values. Entries without exactly one `=`, or with
/// an empty key, are skipped.
///
/// # Examples
///
/// ```ignore
/// let params = parse_custom_parameters("a=1, b = 2, c", false);
/// assert!(params.contains_key("a"));
/// assert!(params.contains_key("b"));
/// assert!(!params.contains_key("c"));
/// ```
pub fn parse_custom_parameters(raw: &str, force_lowercase: bool) -> ParamSet {
    let mut params = ParamSet::new();

    for entry in raw.split(',') {
        let mut parts = entry.split('=');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };

        let key = strip_whitespace(key);
        if key.is_empty() {
            continue;
        }

        let value = strip_whitespace(value);
        let value = if force_lowercase {
            value.to_lowercase()
        } else {
            value
        };

        params.insert(key, value);
    }

    params
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Merges inbound query parameters, UTM parameters and custom parameters.
pub fn merge_params(inbound: &[(String, String)], link: &CampaignLink) -> ParamSet {
    let mut params: ParamSet = inbound.iter().cloned().collect();

    params.merge(utm_params(link));

    if let Some(raw) = link.custom_parameters.as_deref() {
        params.merge(parse_custom_parameters(
            raw,
            link.campaign.force_lowercase,
        ));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Campaign;

    fn link(utm_activated: bool, force_lowercase: bool) -> CampaignLink {
        CampaignLink {
            id: 1,
            link_token: "tok".to_string(),
            landing_page: "https://shop.example/x".to_string(),
            source: Some("Newsletter".to_string()),
            medium: Some("E Mail".to_string()),
            content: None,
            custom_parameters: None,
            campaign: Campaign {
                id: 1,
                campaign_name: "Summer Sale".to_string(),
                status: true,
                end: None,
                utm_activated,
                force_lowercase,
            },
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_param_set_insert_overrides_in_place() {
        let mut params = ParamSet::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");

        let collected: Vec<_> = params.iter().collect();
        assert_eq!(collected, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_param_set_large_inbound_query() {
        let inbound: Vec<(String, String)> = (0..50_000)
            .map(|i| (format!("k{i}"), i.to_string()))
            .chain(std::iter::once(("k7".to_string(), "last".to_string())))
            .collect();

        let params: ParamSet = inbound.into_iter().collect();

        assert_eq!(params.len(), 50_000);
        assert_eq!(params.get("k7"), Some("last"));
        assert_eq!(params.iter().nth(7), Some(("k7", "last")));
        assert_eq!(params.iter().last(), Some(("k49999", "49999")));
    }

    #[test]
    fn test_utm_params_lowercased() {
        let params = utm_params(&link(true, true));

        assert_eq!(params.get("utm_campaign"), Some("summer_sale"));
        assert_eq!(params.get("utm_source"), Some("newsletter"));
        assert_eq!(params.get("utm_medium"), Some("e_mail"));
        assert!(!params.contains_key("utm_content"));
    }

    #[test]
    fn test_utm_params_preserve_case() {
        let params = utm_params(&link(true, false));

        assert_eq!(params.get("utm_campaign"), Some("Summer_Sale"));
        assert_eq!(params.get("utm_source"), Some("Newsletter"));
    }

    #[test]
    fn test_utm_params_disabled() {
        assert!(utm_params(&link(false, true)).is_empty());
    }

    #[test]
    fn test_utm_params_skip_empty_fields() {
        let mut l = link(true, false);
        l.campaign.campaign_name = String::new();
        l.source = Some(String::new());

        let params = utm_params(&l);

        assert!(!params.contains_key("utm_campaign"));
        assert!(!params.contains_key("utm_source"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_parse_custom_parameters_strips_whitespace() {
        let params = parse_custom_parameters("a=1, b = 2", false);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("2"));
    }

    #[test]
    fn test_parse_custom_parameters_skips_malformed() {
        let params = parse_custom_parameters("c, d=1=2, =x, e=5", false);

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("e"), Some("5"));
    }

    #[test]
    fn test_parse_custom_parameters_lowercases_values_only() {
        let params = parse_custom_parameters("Ref=MailChimp", true);
        assert_eq!(params.get("Ref"), Some("mailchimp"));
    }

    #[test]
    fn test_parse_custom_parameters_empty_value_kept() {
        let params = parse_custom_parameters("flag=", false);
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_merge_precedence() {
        let mut l = link(true, true);
        l.custom_parameters = Some("utm_source=partner, extra=YES".to_string());

        let inbound = pairs(&[("foo", "bar"), ("utm_campaign", "old")]);
        let params = merge_params(&inbound, &l);

        assert_eq!(params.get("foo"), Some("bar"));
        assert_eq!(params.get("utm_campaign"), Some("summer_sale"));
        assert_eq!(params.get("utm_source"), Some("partner"));
        assert_eq!(params.get("extra"), Some("yes"));

        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], "foo");
        assert_eq!(keys[1], "utm_campaign");
    }

    #[test]
    fn test_merge_without_utm_or_custom_keeps_inbound() {
        let inbound = pairs(&[("foo", "bar")]);
        let params = merge_params(&inbound, &link(false, false));

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("foo"), Some("bar"));
    }
}
