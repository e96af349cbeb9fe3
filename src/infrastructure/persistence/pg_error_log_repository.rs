//! PostgreSQL implementation of the error log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ErrorLog, NewErrorLog};
use crate::domain::repositories::ErrorLogRepository;
use crate::error::AppError;

pub struct PgErrorLogRepository {
    pool: Arc<PgPool>,
}

impl PgErrorLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ErrorLogRepository for PgErrorLogRepository {
    async fn record_error(&self, entry: NewErrorLog) -> Result<ErrorLog, AppError> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO error_logs (link_token, error_message, stack_context, ip, user_agent)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(&entry.link_token)
        .bind(&entry.error_message)
        .bind(&entry.stack_context)
        .bind(&entry.ip)
        .bind(&entry.user_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(entry.into_error_log(id, created_at))
    }
}
