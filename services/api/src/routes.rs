use crate::infra::{
    AppState, InMemoryEngagementRepository, InMemoryLeadRepository, InMemorySettingsRepository,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use lead_intake::intake::{lead_router, LeadIntakeService};
use lead_intake::metrics::{metrics_router, MetricsState};
use lead_intake::settings::settings_router;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_service_routes(
    leads: Arc<LeadIntakeService<InMemoryLeadRepository>>,
    settings: Arc<InMemorySettingsRepository>,
    engagement: MetricsState<InMemoryEngagementRepository>,
) -> axum::Router {
    lead_router(leads)
        .merge(settings_router(settings))
        .merge(metrics_router(engagement))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
