use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{AssessmentId, AssessmentRecord, EligibilityForm, StudentId};
use super::repository::{AssessmentRepository, RepositoryError};
use super::scoring;
use super::validation::{self, ValidationError};

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("elig-{id:06}"))
}

/// Service composing validation, scoring, and the history repository.
pub struct EligibilityService<R> {
    repository: Arc<R>,
}

impl<R> EligibilityService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and score a submission, appending the outcome to the
    /// student's history. History is append-only; a fresh assessment
    /// supersedes but never overwrites an earlier one.
    pub fn assess(
        &self,
        student_id: StudentId,
        form: EligibilityForm,
    ) -> Result<AssessmentRecord, EligibilityServiceError> {
        let profile = validation::validate(&form)?;
        let result = scoring::score(&profile);

        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            student_id,
            profile,
            result,
            created_at: Utc::now(),
        };

        let stored = self.repository.append(record)?;
        Ok(stored)
    }

    /// Most recent assessment for a student, if any.
    pub fn latest(
        &self,
        student_id: &StudentId,
    ) -> Result<AssessmentRecord, EligibilityServiceError> {
        let record = self
            .repository
            .latest(student_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Full assessment history, newest first.
    pub fn history(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<AssessmentRecord>, EligibilityServiceError> {
        let records = self.repository.history(student_id)?;
        Ok(records)
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
