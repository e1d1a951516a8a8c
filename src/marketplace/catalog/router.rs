use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CatalogItem, FilterCriteria, SortKey};
use super::filter::apply;

/// Router builder exposing the catalog search endpoint over a shared,
/// read-only listing collection.
pub fn catalog_router(catalog: Arc<Vec<CatalogItem>>) -> Router {
    Router::new()
        .route("/api/v1/catalog/search", post(search_handler))
        .with_state(catalog)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogSearchRequest {
    #[serde(default)]
    criteria: FilterCriteria,
    #[serde(default)]
    sort: SortKey,
}

pub(crate) async fn search_handler(
    State(catalog): State<Arc<Vec<CatalogItem>>>,
    Json(request): Json<CatalogSearchRequest>,
) -> Response {
    let items = apply(&catalog, &request.criteria, request.sort);
    let payload = json!({
        "total": items.len(),
        "items": items,
    });
    (StatusCode::OK, Json(payload)).into_response()
}
