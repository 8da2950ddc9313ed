use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use nova_advisory::workflows::eligibility::{
    AssessmentRecord, AssessmentRepository, RepositoryError as AssessmentRepositoryError,
    StudentId,
};
use nova_advisory::workflows::lifecycle::{
    DomainEvent, EntityId, EntityRepository, EventPublisher, LifecycleEntity, PublishError,
    RepositoryError as EntityRepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<StudentId, Vec<AssessmentRecord>>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn append(
        &self,
        record: AssessmentRecord,
    ) -> Result<AssessmentRecord, AssessmentRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard
            .entry(record.student_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn latest(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<AssessmentRecord>, AssessmentRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .get(student_id)
            .and_then(|records| records.last().cloned()))
    }

    fn history(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<AssessmentRecord>, AssessmentRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records = guard.get(student_id).cloned().unwrap_or_default();
        records.reverse();
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEntityRepository {
    records: Arc<Mutex<HashMap<EntityId, LifecycleEntity>>>,
}

impl EntityRepository for InMemoryEntityRepository {
    fn insert(&self, entity: LifecycleEntity) -> Result<LifecycleEntity, EntityRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&entity.entity_id) {
            return Err(EntityRepositoryError::Conflict);
        }
        guard.insert(entity.entity_id.clone(), entity.clone());
        Ok(entity)
    }

    fn fetch(&self, id: &EntityId) -> Result<Option<LifecycleEntity>, EntityRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update(
        &self,
        entity: LifecycleEntity,
        expected_version: u64,
    ) -> Result<(), EntityRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let stored = guard
            .get(&entity.entity_id)
            .ok_or(EntityRepositoryError::NotFound)?;
        if stored.version != expected_version {
            return Err(EntityRepositoryError::StaleVersion {
                expected: expected_version,
                found: stored.version,
            });
        }
        guard.insert(entity.entity_id.clone(), entity);
        Ok(())
    }
}

/// Collects domain events in memory; a deployment would swap in the email
/// and in-app notification adapters here.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEventPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        let mut guard = self.events.lock().expect("event mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

impl InMemoryEventPublisher {
    pub(crate) fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().expect("event mutex poisoned").clone()
    }
}
