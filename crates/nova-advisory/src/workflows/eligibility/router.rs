use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{EligibilityForm, StudentId};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{EligibilityService, EligibilityServiceError};

/// Router builder exposing HTTP endpoints for assessment intake and history.
pub fn eligibility_router<R>(service: Arc<EligibilityService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/assessments", post(assess_handler::<R>))
        .route(
            "/api/v1/eligibility/assessments/:student_id",
            get(latest_handler::<R>),
        )
        .route(
            "/api/v1/eligibility/assessments/:student_id/history",
            get(history_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) student_id: String,
    #[serde(flatten)]
    pub(crate) form: EligibilityForm,
}

pub(crate) async fn assess_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let AssessmentRequest { student_id, form } = request;
    match service.assess(StudentId(student_id), form) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(EligibilityServiceError::Validation(error)) => {
            let payload = json!({
                "error": "validation failed",
                "violations": error.violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = StudentId(student_id);
    match service.latest(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(EligibilityServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "no assessment found",
                "student_id": id.0,
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

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<EligibilityService<R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = StudentId(student_id);
    match service.history(&id) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
