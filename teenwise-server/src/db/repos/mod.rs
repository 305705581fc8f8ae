//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per
//! operation. Mutations use `RETURNING` so the handler never re-reads.

pub mod content;
pub mod tickets;
pub mod analytics;

pub use content::{Content, ContentRepo};
pub use tickets::{SupportTicket, TicketRepo};
pub use analytics::{AnalyticsRepo, Summary};

/// A table-backed record type, named for error messages.
pub trait Resource {
    const NAME: &'static str;
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found<R: Resource>(id: i64) -> Self {
        Self::NotFound {
            resource: R::NAME,
            id: id.to_string(),
        }
    }
}
