use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};

use super::completion::{completion, StudentProfile};

/// Stateless router: completion is a pure calculation over the posted
/// profile, so there is no repository behind this endpoint.
pub fn profile_router() -> Router {
    Router::new().route("/api/v1/profile/completion", post(completion_handler))
}

pub(crate) async fn completion_handler(Json(profile): Json<StudentProfile>) -> impl IntoResponse {
    (StatusCode::OK, Json(completion(&profile)))
}
