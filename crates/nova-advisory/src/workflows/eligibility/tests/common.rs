use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::eligibility::domain::{
    AssessmentRecord, EligibilityForm, EnglishTest, FieldOfStudy, GermanLevel, QualificationLevel,
    ScoreType, StudentId, WorkExperience,
};
use crate::workflows::eligibility::repository::{AssessmentRepository, RepositoryError};
use crate::workflows::eligibility::EligibilityService;

/// Strong profile: CGPA 8.0, IELTS 6.5, B1 German, 3+ years of
/// experience. Scores a perfect 100.
pub(super) fn strong_form() -> EligibilityForm {
    EligibilityForm {
        qualification_level: Some(QualificationLevel::Bachelors),
        field_of_study: Some(FieldOfStudy::Engineering),
        other_field_of_study: None,
        score_type: Some(ScoreType::Cgpa),
        score: Some(8.0),
        english_test: Some(EnglishTest::Ielts),
        english_score: Some(6.5),
        german_level: Some(GermanLevel::B1),
        work_experience: Some(WorkExperience::ThreePlus),
    }
}

/// Weak profile: 55%, no English test, no German, no experience. Scores
/// 20.
pub(super) fn weak_form() -> EligibilityForm {
    EligibilityForm {
        qualification_level: Some(QualificationLevel::Bachelors),
        field_of_study: Some(FieldOfStudy::Business),
        other_field_of_study: None,
        score_type: Some(ScoreType::Percentage),
        score: Some(55.0),
        english_test: Some(EnglishTest::None),
        english_score: None,
        german_level: Some(GermanLevel::None),
        work_experience: Some(WorkExperience::None),
    }
}

pub(super) fn student() -> StudentId {
    StudentId("student-001".to_string())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<StudentId, Vec<AssessmentRecord>>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn append(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        guard
            .entry(record.student_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn latest(&self, student_id: &StudentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard
            .get(student_id)
            .and_then(|records| records.last().cloned()))
    }

    fn history(&self, student_id: &StudentId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        let mut records = guard.get(student_id).cloned().unwrap_or_default();
        records.reverse();
        Ok(records)
    }
}

/// Repository double that fails every call, for error-path routing tests.
pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn append(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn latest(&self, _student_id: &StudentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }

    fn history(&self, _student_id: &StudentId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backing store offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<EligibilityService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(EligibilityService::new(repository.clone()));
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
