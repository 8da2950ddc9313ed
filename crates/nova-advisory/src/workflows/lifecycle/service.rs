use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    Actor, ActorRole, EntityId, EntityKind, LifecycleAction, LifecycleEntity,
};
use super::machine::{transition, TransitionError};
use super::repository::{EntityRepository, EventPublisher, PublishError, RepositoryError};

static ENTITY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_entity_id(kind: EntityKind) -> EntityId {
    let id = ENTITY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EntityId(format!("{}-{id:06}", kind.label()))
}

/// Inbound action as it arrives from the portal.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TransitionCommand {
    pub entity_id: EntityId,
    pub action: LifecycleAction,
    pub actor_id: String,
    pub actor_role: ActorRole,
    #[serde(default)]
    pub comments: Option<String>,
    /// Content version the caller last read; stale values are rejected so
    /// two actors cannot silently overwrite each other.
    pub expected_version: u64,
}

/// Service composing the pure transition table with the persistence and
/// notification collaborators.
pub struct LifecycleService<R, P> {
    repository: Arc<R>,
    events: Arc<P>,
}

impl<R, P> LifecycleService<R, P>
where
    R: EntityRepository + 'static,
    P: EventPublisher + 'static,
{
    pub fn new(repository: Arc<R>, events: Arc<P>) -> Self {
        Self { repository, events }
    }

    /// Create a fresh record in its initial state.
    pub fn create(
        &self,
        kind: EntityKind,
        owner_id: String,
    ) -> Result<LifecycleEntity, LifecycleServiceError> {
        let entity = LifecycleEntity::new(next_entity_id(kind), kind, owner_id, Utc::now());
        let stored = self.repository.insert(entity)?;
        Ok(stored)
    }

    /// Fetch a record for API responses.
    pub fn get(&self, entity_id: &EntityId) -> Result<LifecycleEntity, LifecycleServiceError> {
        let entity = self
            .repository
            .fetch(entity_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(entity)
    }

    /// Validate and apply one transition, persist the result, and publish
    /// the domain event. A rejected transition persists nothing.
    pub fn apply(
        &self,
        command: TransitionCommand,
    ) -> Result<LifecycleEntity, LifecycleServiceError> {
        let entity = self
            .repository
            .fetch(&command.entity_id)?
            .ok_or(RepositoryError::NotFound)?;

        if command.expected_version != entity.version {
            return Err(RepositoryError::StaleVersion {
                expected: command.expected_version,
                found: entity.version,
            }
            .into());
        }

        let actor = Actor {
            actor_id: command.actor_id,
            role: command.actor_role,
        };
        let (next, event) = transition(
            &entity,
            command.action,
            &actor,
            command.comments.as_deref(),
            Utc::now(),
        )?;

        self.repository.update(next.clone(), entity.version)?;
        self.events.publish(event)?;

        Ok(next)
    }
}

/// Error raised by the lifecycle service.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleServiceError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}
