//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for tracked clicks.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO campaign_link_clicks (
                link_token, user_agent, referrer, ip, platform, browser,
                device_type, screen_resolution, language, session_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, created_at
            "#,
        )
        .bind(&new_click.link_token)
        .bind(&new_click.user_agent)
        .bind(&new_click.referrer)
        .bind(&new_click.ip)
        .bind(&new_click.platform)
        .bind(&new_click.browser)
        .bind(&new_click.device_type)
        .bind(&new_click.screen_resolution)
        .bind(&new_click.language)
        .bind(&new_click.session_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(new_click.into_click(id, created_at))
    }
}
