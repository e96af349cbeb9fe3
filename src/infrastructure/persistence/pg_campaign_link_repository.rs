//! PostgreSQL implementation of the campaign link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Campaign, CampaignLink};
use crate::domain::repositories::CampaignLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for campaign link lookups.
///
/// Links are always loaded joined with their campaign, since every caller
/// needs both.
pub struct PgCampaignLinkRepository {
    pool: Arc<PgPool>,
}

impl PgCampaignLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CampaignLinkRow {
    id: i64,
    link_token: String,
    landing_page: String,
    source: Option<String>,
    medium: Option<String>,
    content: Option<String>,
    custom_parameters: Option<String>,
    campaign_id: i64,
    campaign_name: String,
    status: bool,
    ends_at: Option<DateTime<Utc>>,
    utm_activated: bool,
    force_lowercase: bool,
}

impl From<CampaignLinkRow> for CampaignLink {
    fn from(row: CampaignLinkRow) -> Self {
        CampaignLink {
            id: row.id,
            link_token: row.link_token,
            landing_page: row.landing_page,
            source: row.source,
            medium: row.medium,
            content: row.content,
            custom_parameters: row.custom_parameters,
            campaign: Campaign {
                id: row.campaign_id,
                campaign_name: row.campaign_name,
                status: row.status,
                end: row.ends_at,
                utm_activated: row.utm_activated,
                force_lowercase: row.force_lowercase,
            },
        }
    }
}

#[async_trait]
impl CampaignLinkRepository for PgCampaignLinkRepository {
    async fn find_by_token(&self, link_token: &str) -> Result<Option<CampaignLink>, AppError> {
        let row = sqlx::query_as::<_, CampaignLinkRow>(
            r#"
            SELECT
                l.id,
                l.link_token,
                l.landing_page,
                l.source,
                l.medium,
                l.content,
                l.custom_parameters,
                c.id AS campaign_id,
                c.campaign_name,
                c.status,
                c.ends_at,
                c.utm_activated,
                c.force_lowercase
            FROM campaign_links l
            JOIN campaigns c ON c.id = l.campaign_id
            WHERE l.link_token = $1
            "#,
        )
        .bind(link_token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CampaignLink::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
