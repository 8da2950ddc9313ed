//! Integration specifications for the shared review lifecycle.
//!
//! Walks documents, APS forms, and applications through drafting,
//! submission, counsellor review, and disposition via the public service
//! facade, asserting the event trail and the optimistic-concurrency seam.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use nova_advisory::workflows::lifecycle::{
        DomainEvent, EntityId, EntityRepository, EventPublisher, LifecycleEntity,
        LifecycleService, PublishError, RepositoryError,
    };

    pub(super) const OWNER: &str = "student-42";
    pub(super) const REVIEWER: &str = "counsellor-7";

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
        Arc<MemoryEvents>,
    ) {
        let events = Arc::new(MemoryEvents::default());
        let service = Arc::new(LifecycleService::new(
            Arc::new(MemoryRepository::default()),
            events.clone(),
        ));
        (service, events)
    }
}

mod review_cycle {
    use super::common::*;
    use nova_advisory::workflows::lifecycle::{
        ActorRole, EntityKind, LifecycleAction, LifecycleStatus, TransitionCommand,
    };

    fn cmd(
        entity_id: &nova_advisory::workflows::lifecycle::EntityId,
        action: LifecycleAction,
        actor_id: &str,
        actor_role: ActorRole,
        expected_version: u64,
        comments: Option<&str>,
    ) -> TransitionCommand {
        TransitionCommand {
            entity_id: entity_id.clone(),
            action,
            actor_id: actor_id.to_string(),
            actor_role,
            comments: comments.map(str::to_owned),
            expected_version,
        }
    }

    #[test]
    fn document_walks_the_full_revision_cycle() {
        let (service, events) = build_service();
        let entity = service
            .create(EntityKind::Document, OWNER.to_string())
            .expect("creates");
        let id = entity.entity_id.clone();

        let entity = service
            .apply(cmd(&id, LifecycleAction::Generate, OWNER, ActorRole::Owner, 0, None))
            .expect("generate");
        assert_eq!((entity.status, entity.version), (LifecycleStatus::Draft, 1));

        let entity = service
            .apply(cmd(&id, LifecycleAction::Edit, OWNER, ActorRole::Owner, 1, None))
            .expect("edit");
        assert_eq!((entity.status, entity.version), (LifecycleStatus::Draft, 2));

        let entity = service
            .apply(cmd(&id, LifecycleAction::Submit, OWNER, ActorRole::Owner, 2, None))
            .expect("submit");
        assert_eq!(entity.status, LifecycleStatus::Submitted);
        assert_eq!(entity.version, 2);
        let first_submitted_at = entity.submitted_at.expect("stamped");

        let entity = service
            .apply(cmd(&id, LifecycleAction::StartReview, REVIEWER, ActorRole::Reviewer, 2, None))
            .expect("start review");
        assert_eq!(entity.status, LifecycleStatus::UnderReview);

        let entity = service
            .apply(cmd(
                &id,
                LifecycleAction::RequestRevision,
                REVIEWER,
                ActorRole::Reviewer,
                2,
                Some("fix intro"),
            ))
            .expect("request revision");
        assert_eq!(entity.status, LifecycleStatus::NeedsRevision);
        assert_eq!(entity.reviewer_comments.as_deref(), Some("fix intro"));

        let entity = service
            .apply(cmd(&id, LifecycleAction::Edit, OWNER, ActorRole::Owner, 2, None))
            .expect("edit after revision");
        assert_eq!((entity.status, entity.version), (LifecycleStatus::Draft, 3));

        let entity = service
            .apply(cmd(&id, LifecycleAction::Submit, OWNER, ActorRole::Owner, 3, None))
            .expect("resubmit");
        assert_eq!(entity.submitted_at, Some(first_submitted_at));

        service
            .apply(cmd(&id, LifecycleAction::StartReview, REVIEWER, ActorRole::Reviewer, 3, None))
            .expect("second review");
        let entity = service
            .apply(cmd(&id, LifecycleAction::Approve, REVIEWER, ActorRole::Reviewer, 3, None))
            .expect("approve");
        assert_eq!(entity.status, LifecycleStatus::Approved);
        assert!(entity.reviewed_at.is_some());

        let trail: Vec<(LifecycleStatus, LifecycleStatus)> = events
            .events()
            .iter()
            .map(|event| (event.from_status, event.to_status))
            .collect();
        assert_eq!(
            trail,
            vec![
                (LifecycleStatus::NotStarted, LifecycleStatus::Draft),
                (LifecycleStatus::Draft, LifecycleStatus::Draft),
                (LifecycleStatus::Draft, LifecycleStatus::Submitted),
                (LifecycleStatus::Submitted, LifecycleStatus::UnderReview),
                (LifecycleStatus::UnderReview, LifecycleStatus::NeedsRevision),
                (LifecycleStatus::NeedsRevision, LifecycleStatus::Draft),
                (LifecycleStatus::Draft, LifecycleStatus::Submitted),
                (LifecycleStatus::Submitted, LifecycleStatus::UnderReview),
                (LifecycleStatus::UnderReview, LifecycleStatus::Approved),
            ]
        );
    }

    #[test]
    fn all_three_record_families_share_the_table() {
        let (service, _) = build_service();

        for kind in [EntityKind::Document, EntityKind::ApsForm, EntityKind::Application] {
            let entity = service.create(kind, OWNER.to_string()).expect("creates");
            let id = entity.entity_id.clone();

            service
                .apply(cmd(&id, LifecycleAction::Generate, OWNER, ActorRole::Owner, 0, None))
                .expect("generate");
            let entity = service
                .apply(cmd(&id, LifecycleAction::Submit, OWNER, ActorRole::Owner, 1, None))
                .expect("submit");
            assert_eq!(entity.status, LifecycleStatus::Submitted, "{kind:?}");
        }
    }

    #[test]
    fn owner_withdraws_an_application_mid_review() {
        let (service, events) = build_service();
        let entity = service
            .create(EntityKind::Application, OWNER.to_string())
            .expect("creates");
        let id = entity.entity_id.clone();

        service
            .apply(cmd(&id, LifecycleAction::Generate, OWNER, ActorRole::Owner, 0, None))
            .expect("generate");
        service
            .apply(cmd(&id, LifecycleAction::Submit, OWNER, ActorRole::Owner, 1, None))
            .expect("submit");
        service
            .apply(cmd(&id, LifecycleAction::StartReview, REVIEWER, ActorRole::Reviewer, 1, None))
            .expect("review");

        let entity = service
            .apply(cmd(&id, LifecycleAction::Withdraw, OWNER, ActorRole::Owner, 1, None))
            .expect("withdraw");
        assert_eq!(entity.status, LifecycleStatus::Withdrawn);

        let last = events.events().pop().expect("events published");
        assert_eq!(last.from_status, LifecycleStatus::UnderReview);
        assert_eq!(last.to_status, LifecycleStatus::Withdrawn);
        assert_eq!(last.actor_id, OWNER);
    }
}
