use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicantType, ApplicationId, ApplicationStatus};
use super::query::{ReviewContext, ReviewSortOrder};
use super::repository::ApplicationRepository;
use super::service::{ReviewError, ReviewService};

/// Router builder exposing the admin review console endpoints.
///
/// `default_page_size` is the configured console page size, used whenever a
/// list request carries no explicit `page_size` parameter.
pub fn review_router<R>(service: Arc<ReviewService<R>>, default_page_size: usize) -> Router
where
    R: ApplicationRepository + 'static,
{
    let state = ReviewRouterState {
        service,
        default_page_size,
    };

    Router::new()
        .route("/api/v1/admin/applications", get(list_handler::<R>))
        .route(
            "/api/v1/admin/applications/:application_id/approve",
            post(approve_handler::<R>),
        )
        .route(
            "/api/v1/admin/applications/:application_id/reject",
            post(reject_handler::<R>),
        )
        .route(
            "/api/v1/admin/applications/:application_id/reconsider",
            post(reconsider_handler::<R>),
        )
        .route(
            "/api/v1/admin/applications/:application_id",
            delete(remove_handler::<R>),
        )
        .with_state(state)
}

pub(crate) struct ReviewRouterState<R> {
    service: Arc<ReviewService<R>>,
    default_page_size: usize,
}

impl<R> Clone for ReviewRouterState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            default_page_size: self.default_page_size,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationListQuery {
    #[serde(default)]
    status: Option<ApplicationStatus>,
    #[serde(default, rename = "type")]
    applicant_type: Option<ApplicantType>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    sort: Option<ReviewSortOrder>,
    #[serde(default)]
    page: Option<usize>,
    #[serde(default)]
    page_size: Option<usize>,
}

pub(crate) async fn list_handler<R>(
    State(state): State<ReviewRouterState<R>>,
    Query(params): Query<ApplicationListQuery>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let context = ReviewContext {
        tab: params.status.unwrap_or(ApplicationStatus::Pending),
        sub_tab: params.applicant_type,
        search_term: params.search,
        sort: params.sort.unwrap_or_default(),
        page: params.page.unwrap_or(1),
        page_size: params.page_size.unwrap_or(state.default_page_size),
    };

    match state.service.page(&context) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn approve_handler<R>(
    State(state): State<ReviewRouterState<R>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match state.service.approve(&id) {
        Ok(application) => (StatusCode::OK, Json(application)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reject_handler<R>(
    State(state): State<ReviewRouterState<R>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match state.service.reject(&id) {
        Ok(application) => (StatusCode::OK, Json(application)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reconsider_handler<R>(
    State(state): State<ReviewRouterState<R>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match state.service.reconsider(&id) {
        Ok(application) => (StatusCode::OK, Json(application)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn remove_handler<R>(
    State(state): State<ReviewRouterState<R>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let id = ApplicationId(application_id);
    match state.service.remove(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ReviewError) -> Response {
    let status = match &error {
        ReviewError::NotFound(_) => StatusCode::NOT_FOUND,
        ReviewError::InvalidState { .. } => StatusCode::CONFLICT,
        ReviewError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
