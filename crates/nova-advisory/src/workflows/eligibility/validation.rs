use super::domain::{EligibilityForm, EligibilityProfile, FieldOfStudy, ScoreType};

/// A single violated intake rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    #[error("qualification level is required")]
    QualificationLevelRequired,
    #[error("field of study is required")]
    FieldOfStudyRequired,
    #[error("please specify your field of study")]
    OtherFieldOfStudyRequired,
    #[error("score type is required")]
    ScoreTypeRequired,
    #[error("score is required and must be greater than zero")]
    ScoreRequired,
    #[error("CGPA cannot exceed 10")]
    CgpaOutOfRange,
    #[error("percentage cannot exceed 100")]
    PercentageOutOfRange,
    #[error("English proficiency status is required")]
    EnglishTestRequired,
    #[error("English test score is required")]
    EnglishScoreRequired,
    #[error("German language level is required")]
    GermanLevelRequired,
    #[error("work experience is required")]
    WorkExperienceRequired,
}

/// Validation failure carrying every violated rule, so a form can highlight
/// all bad fields at once instead of surfacing them one round-trip at a time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid eligibility form: {}", summary(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| violation.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check the raw form against every intake rule and produce the validated
/// profile. Collect-all: a form violating three rules yields all three.
pub fn validate(form: &EligibilityForm) -> Result<EligibilityProfile, ValidationError> {
    let mut violations = Vec::new();

    if form.qualification_level.is_none() {
        violations.push(Violation::QualificationLevelRequired);
    }

    match form.field_of_study {
        None => violations.push(Violation::FieldOfStudyRequired),
        Some(FieldOfStudy::Other) => {
            let specified = form
                .other_field_of_study
                .as_deref()
                .map(str::trim)
                .is_some_and(|value| !value.is_empty());
            if !specified {
                violations.push(Violation::OtherFieldOfStudyRequired);
            }
        }
        Some(_) => {}
    }

    if form.score_type.is_none() {
        violations.push(Violation::ScoreTypeRequired);
    }

    match form.score {
        None => violations.push(Violation::ScoreRequired),
        Some(score) if score <= 0.0 => violations.push(Violation::ScoreRequired),
        Some(score) => match form.score_type {
            Some(ScoreType::Cgpa) if score > 10.0 => violations.push(Violation::CgpaOutOfRange),
            Some(ScoreType::Percentage) if score > 100.0 => {
                violations.push(Violation::PercentageOutOfRange)
            }
            _ => {}
        },
    }

    match form.english_test {
        None => violations.push(Violation::EnglishTestRequired),
        Some(test) if test.requires_score() && form.english_score.is_none() => {
            violations.push(Violation::EnglishScoreRequired);
        }
        Some(_) => {}
    }

    if form.german_level.is_none() {
        violations.push(Violation::GermanLevelRequired);
    }

    if form.work_experience.is_none() {
        violations.push(Violation::WorkExperienceRequired);
    }

    // Every `None` above pushed a violation, so an empty violation list
    // guarantees the destructuring below succeeds.
    if violations.is_empty() {
        if let (
            Some(qualification_level),
            Some(field_of_study),
            Some(score_type),
            Some(score),
            Some(english_test),
            Some(german_level),
            Some(work_experience),
        ) = (
            form.qualification_level,
            form.field_of_study,
            form.score_type,
            form.score,
            form.english_test,
            form.german_level,
            form.work_experience,
        ) {
            return Ok(EligibilityProfile {
                qualification_level,
                field_of_study,
                other_field_of_study: form
                    .other_field_of_study
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_owned),
                score_type,
                score,
                english_test,
                english_score: form.english_score,
                german_level,
                work_experience,
            });
        }
    }

    Err(ValidationError { violations })
}
