//! Content endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::timestamp;
use crate::db::repos::{Content, ContentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::{ContentDraft, UpdateMode};

/// Content response
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Content> for ContentResponse {
    fn from(c: Content) -> Self {
        Self {
            id: c.id,
            title: c.title,
            body: c.body,
            is_published: c.is_published,
            created_at: timestamp(c.created_at),
            updated_at: timestamp(c.updated_at),
        }
    }
}

/// GET /api/content/ - all content, newest first
async fn list_content(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContentResponse>>, ApiError> {
    let items = ContentRepo::new(&state.pool).list().await?;
    Ok(Json(items.into_iter().map(ContentResponse::from).collect()))
}

/// POST /api/content/ - create a content record
async fn create_content(
    State(state): State<Arc<AppState>>,
    ValidJson(draft): ValidJson<ContentDraft>,
) -> Result<(StatusCode, Json<ContentResponse>), ApiError> {
    let new = draft.validate_new()?;
    let content = ContentRepo::new(&state.pool).create(new).await?;

    tracing::info!(id = content.id, "Created content");
    Ok((StatusCode::CREATED, Json(ContentResponse::from(content))))
}

/// GET /api/content/{id}/
async fn get_content(
    State(state): State<Arc<AppState>>,
    id: RecordId<Content>,
) -> Result<Json<ContentResponse>, ApiError> {
    let content = ContentRepo::new(&state.pool).get(id.get()).await?;
    Ok(Json(ContentResponse::from(content)))
}

/// Look the record up before reading the body, so an unknown id is
/// 404 even when the body is malformed or invalid.
async fn update_content(
    state: &AppState,
    id: RecordId<Content>,
    body: Result<ValidJson<ContentDraft>, ApiError>,
    mode: UpdateMode,
) -> Result<Json<ContentResponse>, ApiError> {
    let repo = ContentRepo::new(&state.pool);
    repo.get(id.get()).await?;

    let ValidJson(draft) = body?;
    let changes = draft.validate_changes(mode)?;
    let content = repo.update(id.get(), changes).await?;
    Ok(Json(ContentResponse::from(content)))
}

/// PUT /api/content/{id}/ - full update
async fn replace_content(
    State(state): State<Arc<AppState>>,
    id: RecordId<Content>,
    body: Result<ValidJson<ContentDraft>, ApiError>,
) -> Result<Json<ContentResponse>, ApiError> {
    update_content(&state, id, body, UpdateMode::Full).await
}

/// PATCH /api/content/{id}/ - partial update
async fn patch_content(
    State(state): State<Arc<AppState>>,
    id: RecordId<Content>,
    body: Result<ValidJson<ContentDraft>, ApiError>,
) -> Result<Json<ContentResponse>, ApiError> {
    update_content(&state, id, body, UpdateMode::Partial).await
}

/// DELETE /api/content/{id}/
async fn delete_content(
    State(state): State<Arc<AppState>>,
    id: RecordId<Content>,
) -> Result<StatusCode, ApiError> {
    ContentRepo::new(&state.pool).delete(id.get()).await?;

    tracing::info!(id = id.get(), "Deleted content");
    Ok(StatusCode::NO_CONTENT)
}

/// Content routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/content/", get(list_content).post(create_content))
        .route(
            "/api/content/{id}/",
            get(get_content)
                .put(replace_content)
                .patch(patch_content)
                .delete(delete_content),
        )
}
