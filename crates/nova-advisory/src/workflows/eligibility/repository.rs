use super::domain::{AssessmentRecord, StudentId};

/// Storage abstraction for the append-only assessment history, so the
/// service module can be exercised against in-memory doubles.
pub trait AssessmentRepository: Send + Sync {
    fn append(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn latest(&self, student_id: &StudentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Full history for a student, newest first.
    fn history(&self, student_id: &StudentId) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for assessment storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
