use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use mindwell::support::assessment::{assessment_router, AssessmentCatalog};
use mindwell::support::community::{community_router, CommunityService, PostRepository};
use mindwell::support::resources::{CRISIS_PROMPT, HOTLINES};
use mindwell::support::risk::chat_router;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_support_routes<R>(
    catalog: Arc<AssessmentCatalog>,
    community: Arc<CommunityService<R>>,
) -> axum::Router
where
    R: PostRepository + 'static,
{
    assessment_router(catalog)
        .merge(chat_router())
        .merge(community_router(community))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/crisis-resources",
            axum::routing::get(crisis_resources_endpoint),
        )
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

pub(crate) async fn crisis_resources_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": CRISIS_PROMPT,
        "resources": HOTLINES,
    }))
}
