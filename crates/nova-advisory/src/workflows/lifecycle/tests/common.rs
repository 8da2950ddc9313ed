use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::lifecycle::domain::{
    Actor, ActorRole, DomainEvent, EntityId, EntityKind, LifecycleEntity,
};
use crate::workflows::lifecycle::repository::{
    EntityRepository, EventPublisher, PublishError, RepositoryError,
};
use crate::workflows::lifecycle::LifecycleService;

pub(super) const OWNER: &str = "student-001";
pub(super) const REVIEWER: &str = "counsellor-007";

pub(super) fn owner() -> Actor {
    Actor {
        actor_id: OWNER.to_string(),
        role: ActorRole::Owner,
    }
}

pub(super) fn reviewer() -> Actor {
    Actor {
        actor_id: REVIEWER.to_string(),
        role: ActorRole::Reviewer,
    }
}

pub(super) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).single().expect("valid timestamp")
}

pub(super) fn fresh_document() -> LifecycleEntity {
    LifecycleEntity::new(
        EntityId("document-000001".to_string()),
        EntityKind::Document,
        OWNER.to_string(),
        epoch(),
    )
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<EntityId, LifecycleEntity>>>,
}

impl EntityRepository for MemoryRepository {
    fn insert(&self, entity: LifecycleEntity) -> Result<LifecycleEntity, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&entity.entity_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(entity.entity_id.clone(), entity.clone());
        Ok(entity)
    }

    fn fetch(&self, id: &EntityId) -> Result<Option<LifecycleEntity>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }

    fn update(
        &self,
        entity: LifecycleEntity,
        expected_version: u64,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        let stored = guard
            .get(&entity.entity_id)
            .ok_or(RepositoryError::NotFound)?;
        if stored.version != expected_version {
            return Err(RepositoryError::StaleVersion {
                expected: expected_version,
                found: stored.version,
            });
        }
        guard.insert(entity.entity_id.clone(), entity);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryEvents {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryEvents {
    pub(super) fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().expect("lock").clone()
    }
}

impl EventPublisher for MemoryEvents {
    fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        self.events.lock().expect("lock").push(event);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    Arc<LifecycleService<MemoryRepository, MemoryEvents>>,
    Arc<MemoryRepository>,
    Arc<MemoryEvents>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let events = Arc::new(MemoryEvents::default());
    let service = Arc::new(LifecycleService::new(repository.clone(), events.clone()));
    (service, repository, events)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
