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

use super::domain::{ActorRole, EntityId, EntityKind, LifecycleAction};
use super::repository::{EntityRepository, EventPublisher, RepositoryError};
use super::service::{LifecycleService, LifecycleServiceError, TransitionCommand};

/// Router builder exposing HTTP endpoints for record creation and
/// transitions.
pub fn lifecycle_router<R, P>(service: Arc<LifecycleService<R, P>>) -> Router
where
    R: EntityRepository + 'static,
    P: EventPublisher + 'static,
{
    Router::new()
        .route("/api/v1/lifecycle/entities", post(create_handler::<R, P>))
        .route(
            "/api/v1/lifecycle/entities/:entity_id",
            get(get_handler::<R, P>),
        )
        .route(
            "/api/v1/lifecycle/entities/:entity_id/transitions",
            post(transition_handler::<R, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateEntityRequest {
    pub(crate) kind: EntityKind,
    pub(crate) owner_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransitionRequest {
    pub(crate) action: LifecycleAction,
    pub(crate) actor_id: String,
    pub(crate) actor_role: ActorRole,
    #[serde(default)]
    pub(crate) comments: Option<String>,
    pub(crate) expected_version: u64,
}

pub(crate) async fn create_handler<R, P>(
    State(service): State<Arc<LifecycleService<R, P>>>,
    axum::Json(request): axum::Json<CreateEntityRequest>,
) -> Response
where
    R: EntityRepository + 'static,
    P: EventPublisher + 'static,
{
    match service.create(request.kind, request.owner_id) {
        Ok(entity) => (StatusCode::CREATED, axum::Json(entity)).into_response(),
        Err(LifecycleServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "record already exists",
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

pub(crate) async fn get_handler<R, P>(
    State(service): State<Arc<LifecycleService<R, P>>>,
    Path(entity_id): Path<String>,
) -> Response
where
    R: EntityRepository + 'static,
    P: EventPublisher + 'static,
{
    let id = EntityId(entity_id);
    match service.get(&id) {
        Ok(entity) => (StatusCode::OK, axum::Json(entity)).into_response(),
        Err(LifecycleServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response(&id)
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn transition_handler<R, P>(
    State(service): State<Arc<LifecycleService<R, P>>>,
    Path(entity_id): Path<String>,
    axum::Json(request): axum::Json<TransitionRequest>,
) -> Response
where
    R: EntityRepository + 'static,
    P: EventPublisher + 'static,
{
    let id = EntityId(entity_id);
    let command = TransitionCommand {
        entity_id: id.clone(),
        action: request.action,
        actor_id: request.actor_id,
        actor_role: request.actor_role,
        comments: request.comments,
        expected_version: request.expected_version,
    };

    match service.apply(command) {
        Ok(entity) => (StatusCode::OK, axum::Json(entity)).into_response(),
        Err(LifecycleServiceError::Transition(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(LifecycleServiceError::Repository(RepositoryError::NotFound)) => {
            not_found_response(&id)
        }
        Err(LifecycleServiceError::Repository(
            conflict @ (RepositoryError::Conflict | RepositoryError::StaleVersion { .. }),
        )) => {
            let payload = json!({
                "error": conflict.to_string(),
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

fn not_found_response(id: &EntityId) -> Response {
    let payload = json!({
        "error": "record not found",
        "entity_id": id.0,
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
