use chrono::{DateTime, Utc};

use super::domain::{
    Actor, ActorRole, DomainEvent, LifecycleAction, LifecycleEntity, LifecycleStatus,
};

/// Rejection raised by the transition table.
///
/// Wrong-state and wrong-actor failures are distinct variants so callers
/// can tell "this action does not apply here" apart from "this actor may
/// not do this".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot {} from {}: {reason}", .action.label(), .current.label())]
    InvalidState {
        current: LifecycleStatus,
        action: LifecycleAction,
        reason: &'static str,
    },
    #[error("{} requires the {} role, actor holds {}", .action.label(), .required.label(), .actual.label())]
    RoleMismatch {
        action: LifecycleAction,
        required: ActorRole,
        actual: ActorRole,
    },
    #[error("actor {actor_id} does not own this record")]
    NotOwner {
        action: LifecycleAction,
        actor_id: String,
    },
    #[error("{} requires reviewer comments", .action.label())]
    CommentsRequired { action: LifecycleAction },
}

/// Apply one action to an entity, producing the updated record and the
/// domain event describing the transition.
///
/// Pure: the input entity is never touched, so a rejected transition
/// leaves the caller's record bit-identical. Version bumps only on
/// content-producing actions (`generate`, `edit`); `submitted_at` is
/// write-once.
pub fn transition(
    entity: &LifecycleEntity,
    action: LifecycleAction,
    actor: &Actor,
    comments: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(LifecycleEntity, DomainEvent), TransitionError> {
    let required = if action.owner_action() {
        ActorRole::Owner
    } else {
        ActorRole::Reviewer
    };
    if actor.role != required {
        return Err(TransitionError::RoleMismatch {
            action,
            required,
            actual: actor.role,
        });
    }
    if required == ActorRole::Owner && actor.actor_id != entity.owner_id {
        return Err(TransitionError::NotOwner {
            action,
            actor_id: actor.actor_id.clone(),
        });
    }

    let mut next = entity.clone();

    match (entity.status, action) {
        (LifecycleStatus::NotStarted, LifecycleAction::Generate) => {
            next.status = LifecycleStatus::Draft;
            next.version += 1;
        }
        (LifecycleStatus::Draft, LifecycleAction::Edit) => {
            next.version += 1;
        }
        (LifecycleStatus::Draft, LifecycleAction::Submit) => {
            next.status = LifecycleStatus::Submitted;
            if next.submitted_at.is_none() {
                next.submitted_at = Some(now);
            }
        }
        (LifecycleStatus::Submitted, LifecycleAction::StartReview) => {
            next.status = LifecycleStatus::UnderReview;
        }
        (LifecycleStatus::UnderReview, LifecycleAction::Approve) => {
            next.status = LifecycleStatus::Approved;
            next.reviewed_at = Some(now);
        }
        (LifecycleStatus::UnderReview, LifecycleAction::RequestRevision) => {
            next.status = LifecycleStatus::NeedsRevision;
            next.reviewed_at = Some(now);
            next.reviewer_comments = Some(required_comments(action, comments)?);
        }
        (LifecycleStatus::UnderReview, LifecycleAction::Reject) => {
            next.status = LifecycleStatus::Rejected;
            next.reviewed_at = Some(now);
            next.reviewer_comments = Some(required_comments(action, comments)?);
        }
        (LifecycleStatus::NeedsRevision, LifecycleAction::Edit) => {
            next.status = LifecycleStatus::Draft;
            next.version += 1;
        }
        (current, LifecycleAction::Withdraw) if !current.is_terminal() => {
            next.status = LifecycleStatus::Withdrawn;
        }
        (current, action) => {
            let reason = if current.is_terminal() {
                "record is in a terminal state"
            } else {
                "action is not defined for the current state"
            };
            return Err(TransitionError::InvalidState {
                current,
                action,
                reason,
            });
        }
    }

    next.updated_at = now;

    let event = DomainEvent {
        entity_id: next.entity_id.clone(),
        kind: next.kind,
        from_status: entity.status,
        to_status: next.status,
        actor_id: actor.actor_id.clone(),
        actor_role: actor.role,
        occurred_at: now,
    };

    Ok((next, event))
}

fn required_comments(
    action: LifecycleAction,
    comments: Option<&str>,
) -> Result<String, TransitionError> {
    comments
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .ok_or(TransitionError::CommentsRequired { action })
}
