use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{LeadId, LeadRecord, LeadSubmission};
use super::repository::{LeadRepository, RepositoryError};
use super::service::{LeadIntakeService, LeadServiceError};

/// Router builder exposing HTTP endpoints for intake and triage.
pub fn lead_router<R>(service: Arc<LeadIntakeService<R>>) -> Router
where
    R: LeadRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/leads",
            get(listing_handler::<R>).post(submit_handler::<R>),
        )
        .route("/api/v1/leads/:lead_id", get(detail_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    axum::Json(form): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.submit(form) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.receipt())).into_response(),
        Err(LeadServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "lead already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn listing_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.ranked() {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(LeadRecord::summary).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    Path(lead_id): Path<u64>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.get(LeadId(lead_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "lead not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
