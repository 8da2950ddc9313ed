use super::domain::{DomainEvent, EntityId, LifecycleEntity};

/// Storage abstraction for lifecycle-managed records.
///
/// `update` is an optimistic write: `expected_version` is the content
/// version the caller read, and implementations must refuse the write with
/// [`RepositoryError::StaleVersion`] when the stored record has moved on,
/// serializing concurrent actors on the same entity. `Conflict` is
/// reserved for duplicate inserts.
pub trait EntityRepository: Send + Sync {
    fn insert(&self, entity: LifecycleEntity) -> Result<LifecycleEntity, RepositoryError>;
    fn fetch(&self, id: &EntityId) -> Result<Option<LifecycleEntity>, RepositoryError>;
    fn update(
        &self,
        entity: LifecycleEntity,
        expected_version: u64,
    ) -> Result<(), RepositoryError>;
}

/// Error enumeration for entity storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("stale version: expected {expected}, found {found}")]
    StaleVersion { expected: u64, found: u64 },
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook consuming the domain event emitted on each transition.
/// Email and in-app notification adapters live behind this seam; the core
/// only publishes.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: DomainEvent) -> Result<(), PublishError>;
}

/// Event dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("event transport unavailable: {0}")]
    Transport(String),
}
