//! Analytics summary endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{AnalyticsRepo, Summary};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Summary response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub content_count: i64,
    pub support_open: i64,
}

impl From<Summary> for SummaryResponse {
    fn from(s: Summary) -> Self {
        Self {
            content_count: s.content_count,
            support_open: s.support_open,
        }
    }
}

/// GET /api/analytics/summary/
async fn summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = AnalyticsRepo::new(&state.pool).summary().await?;
    Ok(Json(SummaryResponse::from(summary)))
}

/// Analytics routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/analytics/summary/", get(summary))
}
