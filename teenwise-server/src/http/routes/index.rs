//! API root: links to each resource collection

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiIndex {
    pub content: &'static str,
    pub support: &'static str,
    pub analytics: &'static str,
}

/// GET /api/
async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        content: "/api/content/",
        support: "/api/support/",
        analytics: "/api/analytics/summary/",
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/", get(index))
}
