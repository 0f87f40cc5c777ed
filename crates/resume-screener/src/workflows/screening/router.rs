use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ScreeningId;
use super::repository::{RepositoryError, ScreeningRepository};
use super::service::{FeatureRequest, ScreeningRequest, ScreeningService, ScreeningServiceError};

const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Router builder exposing HTTP endpoints for screening, extraction and features.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: ScreeningRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/screenings",
            post(screen_handler::<R>).get(history_handler::<R>),
        )
        .route(
            "/api/v1/screenings/:screening_id",
            get(screening_handler::<R>),
        )
        .route("/api/v1/profiles/extract", post(extract_handler::<R>))
        .route("/api/v1/features", post(features_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractRequest {
    resume_text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryQuery {
    limit: Option<usize>,
}

pub(crate) async fn screen_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<ScreeningRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    match service.screen(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(ScreeningServiceError::NoJobPostings) => {
            let payload = json!({
                "error": ScreeningServiceError::NoJobPostings.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ScreeningServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "screening already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn screening_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(screening_id): Path<String>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let id = ScreeningId(screening_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "screening not found",
                "screening_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    match service.recent(limit) {
        Ok(summaries) => (StatusCode::OK, axum::Json(summaries)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn extract_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<ExtractRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let profile = service.extract(&request.resume_text);
    (StatusCode::OK, axum::Json(profile)).into_response()
}

pub(crate) async fn features_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<FeatureRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let report = service.features(&request);
    (StatusCode::OK, axum::Json(report)).into_response()
}

fn internal_error(error: ScreeningServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
