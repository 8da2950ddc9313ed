use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for students submitting assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

/// Identifier wrapper for stored assessment records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationLevel {
    HighSchool,
    Diploma,
    Bachelors,
    Masters,
    Phd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOfStudy {
    Engineering,
    Business,
    It,
    HealthSciences,
    Arts,
    Other,
}

/// Whether the academic score arrives on the Indian 10-point CGPA scale or
/// as a percentage. The bound check and the bucketing both depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    Cgpa,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishTest {
    Ielts,
    Toefl,
    None,
    Pending,
}

impl EnglishTest {
    /// Tests that come with a numeric score attached.
    pub const fn requires_score(self) -> bool {
        matches!(self, Self::Ielts | Self::Toefl)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GermanLevel {
    None,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkExperience {
    None,
    LessThanOne,
    OneToThree,
    ThreePlus,
}

/// Raw form submission as it arrives from the student dashboard.
///
/// Every field is optional so validation can report the complete set of
/// missing or out-of-range inputs in one pass rather than failing on the
/// first. [`super::validation::validate`] turns this into an
/// [`EligibilityProfile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityForm {
    pub qualification_level: Option<QualificationLevel>,
    pub field_of_study: Option<FieldOfStudy>,
    #[serde(default)]
    pub other_field_of_study: Option<String>,
    pub score_type: Option<ScoreType>,
    pub score: Option<f32>,
    pub english_test: Option<EnglishTest>,
    #[serde(default)]
    pub english_score: Option<f32>,
    pub german_level: Option<GermanLevel>,
    pub work_experience: Option<WorkExperience>,
}

/// Fully validated assessment input; scoring only ever sees this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityProfile {
    pub qualification_level: QualificationLevel,
    pub field_of_study: FieldOfStudy,
    pub other_field_of_study: Option<String>,
    pub score_type: ScoreType,
    pub score: f32,
    pub english_test: EnglishTest,
    pub english_score: Option<f32>,
    pub german_level: GermanLevel,
    pub work_experience: WorkExperience,
}

/// Per-component readiness points. Components always sum to `total_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub academic_score: u8,
    pub english_score: u8,
    pub german_score: u8,
    pub work_experience_score: u8,
    pub total_score: u8,
}

/// Three-tier classification of the readiness score.
///
/// Ordering is meaningful: `PublicEligible` is the strongest outcome and
/// `NeedsImprovement` the weakest, so tier comparisons can lean on `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityLevel {
    NeedsImprovement,
    PrivateEligible,
    PublicEligible,
}

impl EligibilityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PublicEligible => "Eligible for Public Universities",
            Self::PrivateEligible => "Additional Steps Required",
            Self::NeedsImprovement => "Profile Needs Strengthening",
        }
    }
}

/// Dashboard badge derived from the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityBadge {
    pub label: &'static str,
    pub color: &'static str,
}

/// Outcome of a single assessment. Derived data only; never mutated, a
/// re-assessment appends a fresh result to the student's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityResult {
    pub breakdown: ScoreBreakdown,
    pub level: EligibilityLevel,
    pub badge: EligibilityBadge,
    pub message: &'static str,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<&'static str>,
}

/// Append-only history row owned by the student record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub student_id: StudentId,
    pub profile: EligibilityProfile,
    pub result: EligibilityResult,
    pub created_at: DateTime<Utc>,
}
