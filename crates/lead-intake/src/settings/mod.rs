//! Workspace settings revisions exposed to the staff console.
//!
//! Settings are append-only; the newest revision wins. When nothing has been
//! saved yet the latest-endpoint answers with an empty placeholder instead
//! of 404, so the console can render a blank form without special-casing.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Stored settings revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub id: u64,
    pub services: String,
    pub budget_range: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SettingsRecord {
    /// Placeholder returned when no revision has been saved yet.
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            services: String::new(),
            budget_range: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Inbound payload for a new revision.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsDraft {
    pub services: String,
    pub budget_range: String,
}

/// Storage seam; the store assigns revision ids.
pub trait SettingsRepository: Send + Sync {
    fn insert(&self, draft: SettingsDraft) -> Result<SettingsRecord, SettingsStoreError>;
    fn latest(&self) -> Result<Option<SettingsRecord>, SettingsStoreError>;
    fn list(&self) -> Result<Vec<SettingsRecord>, SettingsStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsStoreError {
    #[error("settings store unavailable: {0}")]
    Unavailable(String),
}

/// Router builder for the settings endpoints.
pub fn settings_router<S>(repository: Arc<S>) -> Router
where
    S: SettingsRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/settings",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route("/api/v1/settings/latest", get(latest_handler::<S>))
        .with_state(repository)
}

pub(crate) async fn create_handler<S>(
    State(repository): State<Arc<S>>,
    axum::Json(draft): axum::Json<SettingsDraft>,
) -> Response
where
    S: SettingsRepository + 'static,
{
    match repository.insert(draft) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => store_error(err),
    }
}

pub(crate) async fn latest_handler<S>(State(repository): State<Arc<S>>) -> Response
where
    S: SettingsRepository + 'static,
{
    match repository.latest() {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record)).into_response(),
        Ok(None) => (StatusCode::OK, axum::Json(SettingsRecord::empty())).into_response(),
        Err(err) => store_error(err),
    }
}

pub(crate) async fn list_handler<S>(State(repository): State<Arc<S>>) -> Response
where
    S: SettingsRepository + 'static,
{
    match repository.list() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => store_error(err),
    }
}

fn store_error(err: SettingsStoreError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
