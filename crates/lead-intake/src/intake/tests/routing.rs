use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::intake::router::{lead_router, submit_handler};
use crate::intake::service::LeadIntakeService;

#[tokio::test]
async fn submit_route_returns_created_with_score() {
    let (service, _) = build_service();
    let router = lead_router(service);

    let body = json!({
        "first_name": "Анна",
        "budget": "5000000",
        "company_size": "500+",
        "deadline": "1 неделя",
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/leads")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").is_some());
    assert_eq!(
        payload
            .get("priority_score")
            .and_then(serde_json::Value::as_u64),
        Some(100)
    );
}

#[tokio::test]
async fn submit_route_tolerates_a_minimal_payload() {
    let (service, _) = build_service();
    let router = lead_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/leads")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{}"))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .get("priority_score")
            .and_then(serde_json::Value::as_u64),
        Some(20)
    );
}

#[tokio::test]
async fn listing_route_returns_ranked_summaries() {
    let (service, _) = build_service();

    service
        .submit(form(None, None, None, None))
        .expect("submission succeeds");
    service
        .submit(form(Some("5000000"), Some("500+"), Some("1 неделя"), None))
        .expect("submission succeeds");

    let router = lead_router(service);
    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/leads")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rows = payload.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0]
            .get("priority_score")
            .and_then(serde_json::Value::as_u64),
        Some(100)
    );
    assert_eq!(
        rows[1]
            .get("priority_score")
            .and_then(serde_json::Value::as_u64),
        Some(20)
    );
    assert_eq!(
        rows[0]
            .get("contact_name")
            .and_then(serde_json::Value::as_str),
        Some("Петрова Анна")
    );
}

#[tokio::test]
async fn detail_route_maps_missing_to_not_found() {
    let (service, _) = build_service();
    let router = lead_router(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/leads/424242")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_route_returns_the_full_record() {
    let (service, _) = build_service();
    let record = service
        .submit(form(Some("300000"), Some("20"), None, None))
        .expect("submission succeeds");

    let router = lead_router(service);
    let response = router
        .oneshot(
            axum::http::Request::get(format!("/api/v1/leads/{}", record.id.0))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("priority_score").and_then(serde_json::Value::as_u64),
        Some(30)
    );
    assert_eq!(
        payload
            .pointer("/form/budget")
            .and_then(serde_json::Value::as_str),
        Some("300000")
    );
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(LeadIntakeService::new(Arc::new(UnavailableRepository)));

    let response =
        submit_handler::<UnavailableRepository>(State(service), axum::Json(form(None, None, None, None)))
            .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
