//! Support ticket repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{DbError, Resource};
use crate::models::{NewTicket, TicketChanges};

/// Support ticket record from database
#[derive(Debug, Clone, FromRow)]
pub struct SupportTicket {
    pub id: i64,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for SupportTicket {
    const NAME: &'static str = "support ticket";
}

/// Support ticket repository
pub struct TicketRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TicketRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All tickets, newest first.
    pub async fn list(&self) -> Result<Vec<SupportTicket>, DbError> {
        let rows: Vec<SupportTicket> = sqlx::query_as(
            r#"
            SELECT id, email, subject, message, status, created_at, updated_at
            FROM support_tickets
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, new: NewTicket) -> Result<SupportTicket, DbError> {
        let row: SupportTicket = sqlx::query_as(
            r#"
            INSERT INTO support_tickets (email, subject, message, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, subject, message, status, created_at, updated_at
            "#,
        )
        .bind(new.email.as_str())
        .bind(new.subject.as_str())
        .bind(new.message.as_str())
        .bind(new.status.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = row.id, status = %row.status, "support ticket created");
        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<SupportTicket, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, email, subject, message, status, created_at, updated_at
            FROM support_tickets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found::<SupportTicket>(id))
    }

    pub async fn update(&self, id: i64, changes: TicketChanges) -> Result<SupportTicket, DbError> {
        sqlx::query_as(
            r#"
            UPDATE support_tickets
            SET email = COALESCE($2, email),
                subject = COALESCE($3, subject),
                message = COALESCE($4, message),
                status = COALESCE($5, status),
                updated_at = GREATEST(NOW(), updated_at)
            WHERE id = $1
            RETURNING id, email, subject, message, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.email.as_ref().map(|e| e.as_str()))
        .bind(changes.subject.as_ref().map(|s| s.as_str()))
        .bind(changes.message.as_ref().map(|m| m.as_str()))
        .bind(changes.status.as_ref().map(|s| s.as_str()))
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found::<SupportTicket>(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM support_tickets WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found::<SupportTicket>(id));
        }
        Ok(())
    }
}
