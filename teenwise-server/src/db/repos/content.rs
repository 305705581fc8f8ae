//! Content repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{DbError, Resource};
use crate::models::{ContentChanges, NewContent};

/// Content record from database
#[derive(Debug, Clone, FromRow)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Content {
    const NAME: &'static str = "content";
}

/// Content repository
pub struct ContentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All content, newest first.
    pub async fn list(&self) -> Result<Vec<Content>, DbError> {
        let rows: Vec<Content> = sqlx::query_as(
            r#"
            SELECT id, title, body, is_published, created_at, updated_at
            FROM content
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a record. Both timestamps come from the same `NOW()`.
    pub async fn create(&self, new: NewContent) -> Result<Content, DbError> {
        let row: Content = sqlx::query_as(
            r#"
            INSERT INTO content (title, body, is_published)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, is_published, created_at, updated_at
            "#,
        )
        .bind(new.title.as_str())
        .bind(new.body.as_str())
        .bind(new.is_published)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = row.id, "content created");
        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<Content, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, body, is_published, created_at, updated_at
            FROM content
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found::<Content>(id))
    }

    /// Apply changes and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the database clock does.
    pub async fn update(&self, id: i64, changes: ContentChanges) -> Result<Content, DbError> {
        sqlx::query_as(
            r#"
            UPDATE content
            SET title = COALESCE($2, title),
                body = COALESCE($3, body),
                is_published = COALESCE($4, is_published),
                updated_at = GREATEST(NOW(), updated_at)
            WHERE id = $1
            RETURNING id, title, body, is_published, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.title.as_ref().map(|t| t.as_str()))
        .bind(changes.body.as_ref().map(|b| b.as_str()))
        .bind(changes.is_published)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found::<Content>(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM content WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found::<Content>(id));
        }
        Ok(())
    }
}
