use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::json;

use super::stats::engagement_stats;
use super::{EngagementDraft, EngagementRepository, EngagementStoreError};

/// Shared state for the metrics endpoints.
pub struct MetricsState<R> {
    pub repository: Arc<R>,
    pub heatmap_limit: usize,
}

impl<R> Clone for MetricsState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            heatmap_limit: self.heatmap_limit,
        }
    }
}

/// Router builder for engagement collection and statistics.
pub fn metrics_router<R>(state: MetricsState<R>) -> Router
where
    R: EngagementRepository + 'static,
{
    Router::new()
        .route("/api/v1/metrics", post(collect_handler::<R>))
        .route("/api/v1/metrics/stats", get(stats_handler::<R>))
        .with_state(state)
}

pub(crate) async fn collect_handler<R>(
    State(state): State<MetricsState<R>>,
    axum::Json(draft): axum::Json<EngagementDraft>,
) -> Response
where
    R: EngagementRepository + 'static,
{
    match state.repository.insert(draft) {
        Ok(sample) => (StatusCode::CREATED, axum::Json(sample)).into_response(),
        Err(err) => store_error(err),
    }
}

pub(crate) async fn stats_handler<R>(State(state): State<MetricsState<R>>) -> Response
where
    R: EngagementRepository + 'static,
{
    match engagement_stats(state.repository.as_ref(), Utc::now(), state.heatmap_limit) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(err) => store_error(err),
    }
}

fn store_error(err: EngagementStoreError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
