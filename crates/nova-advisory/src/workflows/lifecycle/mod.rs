//! Review lifecycle shared by documents, APS forms, and university
//! applications.
//!
//! One transition table drives all three record families: owner drafting
//! and submission, counsellor review, and terminal disposition. The table
//! itself ([`machine::transition`]) is a pure function; persistence and
//! notification sit behind injected traits.

pub mod domain;
pub mod machine;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Actor, ActorRole, DomainEvent, EntityId, EntityKind, LifecycleAction, LifecycleEntity,
    LifecycleStatus,
};
pub use machine::{transition, TransitionError};
pub use repository::{EntityRepository, EventPublisher, PublishError, RepositoryError};
pub use router::lifecycle_router;
pub use service::{LifecycleService, LifecycleServiceError, TransitionCommand};
