use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use nova_advisory::workflows::eligibility::{
    eligibility_router, AssessmentRepository, EligibilityService,
};
use nova_advisory::workflows::lifecycle::{
    lifecycle_router, EntityRepository, EventPublisher, LifecycleService,
};
use nova_advisory::workflows::profile::profile_router;

pub(crate) fn with_workflow_routes<R, E, P>(
    eligibility: Arc<EligibilityService<R>>,
    lifecycle: Arc<LifecycleService<E, P>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    E: EntityRepository + 'static,
    P: EventPublisher + 'static,
{
    eligibility_router(eligibility)
        .merge(lifecycle_router(lifecycle))
        .merge(profile_router())
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
