//! Cross-table counts for the analytics summary

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::OPEN_STATUS;

/// Summary counts, recomputed on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Summary {
    /// All content records, published or not
    pub content_count: i64,
    /// Tickets whose status is exactly `"open"`
    pub support_open: i64,
}

/// Analytics repository (read-only)
pub struct AnalyticsRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AnalyticsRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn summary(&self) -> Result<Summary, DbError> {
        let summary: Summary = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM content) AS content_count,
                (SELECT COUNT(*) FROM support_tickets WHERE status = $1) AS support_open
            "#,
        )
        .bind(OPEN_STATUS)
        .fetch_one(self.pool)
        .await?;

        Ok(summary)
    }
}
