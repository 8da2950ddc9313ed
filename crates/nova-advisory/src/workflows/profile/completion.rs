use serde::{Deserialize, Serialize};

/// Student profile fields as collected by the onboarding forms. Every
/// field is optional; completion tracking is exactly presence counting
/// over the canonical list below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub mobile_number: Option<String>,
    pub highest_qualification: Option<String>,
    pub field_of_study: Option<String>,
    pub institution_name: Option<String>,
    pub cgpa_percentage: Option<f32>,
    pub graduation_year: Option<u16>,
    pub english_test_type: Option<String>,
    pub english_score: Option<f32>,
    pub preferred_intake: Option<String>,
    pub study_level: Option<String>,
    pub preferred_program: Option<String>,
}

/// The canonical required-field list. Historically this list was
/// duplicated with slight drift across three call sites; this module is
/// now the single source of truth.
const REQUIRED_FIELDS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCompletion {
    pub percentage: u8,
    pub missing_fields: Vec<&'static str>,
}

fn present(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(str::trim)
        .is_some_and(|text| !text.is_empty())
}

/// Percentage of the canonical field list that is filled in, floored.
/// Whitespace-only strings count as missing.
pub fn completion(profile: &StudentProfile) -> ProfileCompletion {
    let mut missing_fields = Vec::new();

    if !present(&profile.first_name) {
        missing_fields.push("first_name");
    }
    if !present(&profile.last_name) {
        missing_fields.push("last_name");
    }
    if !present(&profile.date_of_birth) {
        missing_fields.push("date_of_birth");
    }
    if !present(&profile.nationality) {
        missing_fields.push("nationality");
    }
    if !present(&profile.mobile_number) {
        missing_fields.push("mobile_number");
    }
    if !present(&profile.highest_qualification) {
        missing_fields.push("highest_qualification");
    }
    if !present(&profile.field_of_study) {
        missing_fields.push("field_of_study");
    }
    if !present(&profile.institution_name) {
        missing_fields.push("institution_name");
    }
    if profile.cgpa_percentage.is_none() {
        missing_fields.push("cgpa_percentage");
    }
    if profile.graduation_year.is_none() {
        missing_fields.push("graduation_year");
    }
    if !present(&profile.english_test_type) {
        missing_fields.push("english_test_type");
    }
    if profile.english_score.is_none() {
        missing_fields.push("english_score");
    }
    if !present(&profile.preferred_intake) {
        missing_fields.push("preferred_intake");
    }
    if !present(&profile.study_level) {
        missing_fields.push("study_level");
    }
    if !present(&profile.preferred_program) {
        missing_fields.push("preferred_program");
    }

    let completed = REQUIRED_FIELDS - missing_fields.len();
    let percentage = (completed * 100 / REQUIRED_FIELDS) as u8;

    ProfileCompletion {
        percentage,
        missing_fields,
    }
}
