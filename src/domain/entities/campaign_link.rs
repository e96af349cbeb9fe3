//! Campaign link entity, the target of a tracked click.

use super::Campaign;

/// A tokenized link belonging to a campaign.
///
/// The `link_token` is the path segment of the public tracking URL. The UTM
/// component fields and `custom_parameters` feed the query parameters that
/// are appended to `landing_page` on redirect.
#[derive(Debug, Clone)]
pub struct CampaignLink {
    pub id: i64,
    pub link_token: String,
    pub landing_page: String,
    pub source: Option<String>,
    pub medium: Option<String>,
    pub content: Option<String>,
    /// Raw `key=value` pairs separated by commas, e.g. `"ref=mail, promo=x"`.
    pub custom_parameters: Option<String>,
    /// The owning campaign, loaded together with the link.
    pub campaign: Campaign,
}
