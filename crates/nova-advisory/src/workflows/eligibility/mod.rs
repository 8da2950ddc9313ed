//! Readiness scoring for German university admissions.
//!
//! A raw [`EligibilityForm`] is validated (collect-all, every violated rule
//! reported at once), scored through deterministic step functions into a
//! 0-100 [`ScoreBreakdown`], and classified into one of three tiers with
//! tier-specific recommendations and next steps. Assessments are
//! append-only history rows owned by the student record.

pub mod domain;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentId, AssessmentRecord, EligibilityBadge, EligibilityForm, EligibilityLevel,
    EligibilityProfile, EligibilityResult, EnglishTest, FieldOfStudy, GermanLevel,
    QualificationLevel, ScoreBreakdown, ScoreType, StudentId, WorkExperience,
};
pub use repository::{AssessmentRepository, RepositoryError};
pub use router::eligibility_router;
pub use scoring::{
    score, ACADEMIC_MAX, ENGLISH_MAX, GERMAN_MAX, PRIVATE_THRESHOLD, PUBLIC_THRESHOLD,
    WORK_EXPERIENCE_MAX,
};
pub use service::{EligibilityService, EligibilityServiceError};
pub use validation::{validate, ValidationError, Violation};
