//! Profile completion tracking for the student dashboard.

pub mod completion;
pub mod router;

pub use completion::{completion, ProfileCompletion, StudentProfile};
pub use router::profile_router;
