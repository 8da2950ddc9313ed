use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for lifecycle-managed records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

/// The three record families that move through the review lifecycle.
/// Structurally parallel: one transition table serves all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Document,
    ApsForm,
    Application,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::ApsForm => "aps_form",
            Self::Application => "application",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    NotStarted,
    Draft,
    Submitted,
    UnderReview,
    Approved,
    NeedsRevision,
    Rejected,
    Withdrawn,
}

impl LifecycleStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::NeedsRevision => "needs_revision",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Terminal states accept no further action.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Withdrawn)
    }
}

/// Who is acting on an entity. Owners draft and submit; reviewers
/// adjudicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Owner,
    Reviewer,
}

impl ActorRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Reviewer => "reviewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub actor_id: String,
    pub role: ActorRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Generate,
    Edit,
    Submit,
    StartReview,
    Approve,
    RequestRevision,
    Reject,
    Withdraw,
}

impl LifecycleAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Edit => "edit",
            Self::Submit => "submit",
            Self::StartReview => "start_review",
            Self::Approve => "approve",
            Self::RequestRevision => "request_revision",
            Self::Reject => "reject",
            Self::Withdraw => "withdraw",
        }
    }

    /// Actions reserved for the entity owner.
    pub const fn owner_action(self) -> bool {
        matches!(
            self,
            Self::Generate | Self::Edit | Self::Submit | Self::Withdraw
        )
    }
}

/// One document, APS form, or application moving through the review
/// lifecycle.
///
/// `version` counts content revisions only; status transitions never touch
/// it. `submitted_at` is stamped on the first submission and immutable
/// afterwards, so a revise-and-resubmit cycle keeps the original date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEntity {
    pub entity_id: EntityId,
    pub kind: EntityKind,
    pub owner_id: String,
    pub status: LifecycleStatus,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_comments: Option<String>,
}

impl LifecycleEntity {
    /// Fresh record in its initial state. Content does not exist yet, so
    /// the version starts at zero.
    pub fn new(entity_id: EntityId, kind: EntityKind, owner_id: String, now: DateTime<Utc>) -> Self {
        Self {
            entity_id,
            kind,
            owner_id,
            status: LifecycleStatus::NotStarted,
            version: 0,
            created_at: now,
            updated_at: now,
            submitted_at: None,
            reviewed_at: None,
            reviewer_comments: None,
        }
    }
}

/// Emitted once per applied transition for the external notification
/// collaborator. The state machine never calls a notifier itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub entity_id: EntityId,
    pub kind: EntityKind,
    pub from_status: LifecycleStatus,
    pub to_status: LifecycleStatus,
    pub actor_id: String,
    pub actor_role: ActorRole,
    pub occurred_at: DateTime<Utc>,
}
