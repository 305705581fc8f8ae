//! Support ticket endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::timestamp;
use crate::db::repos::{SupportTicket, TicketRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::{TicketDraft, UpdateMode};

/// Support ticket response
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: i64,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SupportTicket> for TicketResponse {
    fn from(t: SupportTicket) -> Self {
        Self {
            id: t.id,
            email: t.email,
            subject: t.subject,
            message: t.message,
            status: t.status,
            created_at: timestamp(t.created_at),
            updated_at: timestamp(t.updated_at),
        }
    }
}

/// GET /api/support/ - all tickets, newest first
async fn list_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TicketResponse>>, ApiError> {
    let tickets = TicketRepo::new(&state.pool).list().await?;
    Ok(Json(tickets.into_iter().map(TicketResponse::from).collect()))
}

/// POST /api/support/ - open a ticket
async fn create_ticket(
    State(state): State<Arc<AppState>>,
    ValidJson(draft): ValidJson<TicketDraft>,
) -> Result<(StatusCode, Json<TicketResponse>), ApiError> {
    let new = draft.validate_new()?;
    let ticket = TicketRepo::new(&state.pool).create(new).await?;

    tracing::info!(id = ticket.id, status = %ticket.status, "Created support ticket");
    Ok((StatusCode::CREATED, Json(TicketResponse::from(ticket))))
}

/// GET /api/support/{id}/
async fn get_ticket(
    State(state): State<Arc<AppState>>,
    id: RecordId<SupportTicket>,
) -> Result<Json<TicketResponse>, ApiError> {
    let ticket = TicketRepo::new(&state.pool).get(id.get()).await?;
    Ok(Json(TicketResponse::from(ticket)))
}

/// Look the record up before reading the body, so an unknown id is
/// 404 even when the body is malformed or invalid.
async fn update_ticket(
    state: &AppState,
    id: RecordId<SupportTicket>,
    body: Result<ValidJson<TicketDraft>, ApiError>,
    mode: UpdateMode,
) -> Result<Json<TicketResponse>, ApiError> {
    let repo = TicketRepo::new(&state.pool);
    repo.get(id.get()).await?;

    let ValidJson(draft) = body?;
    let changes = draft.validate_changes(mode)?;
    let ticket = repo.update(id.get(), changes).await?;
    Ok(Json(TicketResponse::from(ticket)))
}

/// PUT /api/support/{id}/ - full update
async fn replace_ticket(
    State(state): State<Arc<AppState>>,
    id: RecordId<SupportTicket>,
    body: Result<ValidJson<TicketDraft>, ApiError>,
) -> Result<Json<TicketResponse>, ApiError> {
    update_ticket(&state, id, body, UpdateMode::Full).await
}

/// PATCH /api/support/{id}/ - partial update, e.g. `{"status": "closed"}`
async fn patch_ticket(
    State(state): State<Arc<AppState>>,
    id: RecordId<SupportTicket>,
    body: Result<ValidJson<TicketDraft>, ApiError>,
) -> Result<Json<TicketResponse>, ApiError> {
    update_ticket(&state, id, body, UpdateMode::Partial).await
}

/// DELETE /api/support/{id}/
async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    id: RecordId<SupportTicket>,
) -> Result<StatusCode, ApiError> {
    TicketRepo::new(&state.pool).delete(id.get()).await?;

    tracing::info!(id = id.get(), "Deleted support ticket");
    Ok(StatusCode::NO_CONTENT)
}

/// Support ticket routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/support/", get(list_tickets).post(create_ticket))
        .route(
            "/api/support/{id}/",
            get(get_ticket)
                .put(replace_ticket)
                .patch(patch_ticket)
                .delete(delete_ticket),
        )
}
