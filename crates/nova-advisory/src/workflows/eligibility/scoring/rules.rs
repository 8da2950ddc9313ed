use super::super::domain::{
    EligibilityProfile, EligibilityLevel, EnglishTest, GermanLevel, ScoreBreakdown, ScoreType,
    WorkExperience,
};

pub const ACADEMIC_MAX: u8 = 40;
pub const ENGLISH_MAX: u8 = 20;
pub const GERMAN_MAX: u8 = 25;
pub const WORK_EXPERIENCE_MAX: u8 = 15;

pub const PUBLIC_THRESHOLD: u8 = 70;
pub const PRIVATE_THRESHOLD: u8 = 50;

/// Bucket the academic score. Step function, not continuous: German
/// admissions talk in grade bands, not decimals.
pub(crate) fn academic_points(score_type: ScoreType, score: f32) -> u8 {
    match score_type {
        ScoreType::Cgpa => {
            if score >= 7.0 {
                40
            } else if score >= 6.0 {
                30
            } else if score >= 5.0 {
                20
            } else {
                10
            }
        }
        ScoreType::Percentage => {
            if score >= 70.0 {
                40
            } else if score >= 60.0 {
                30
            } else if score >= 50.0 {
                20
            } else {
                10
            }
        }
    }
}

/// A selected test with no score contributes nothing; validation rejects
/// that shape before scoring, this is the defensive fallback.
pub(crate) fn english_points(test: EnglishTest, score: Option<f32>) -> u8 {
    match test {
        EnglishTest::None => 0,
        EnglishTest::Pending => 10,
        EnglishTest::Ielts => match score {
            Some(band) if band >= 6.0 => 20,
            Some(band) if band >= 5.5 => 15,
            Some(_) => 10,
            None => 0,
        },
        EnglishTest::Toefl => match score {
            Some(points) if points >= 80.0 => 20,
            Some(points) if points >= 70.0 => 15,
            Some(_) => 10,
            None => 0,
        },
    }
}

pub(crate) fn german_points(level: GermanLevel) -> u8 {
    match level {
        GermanLevel::B1 | GermanLevel::B2 | GermanLevel::C1 | GermanLevel::C2 => 25,
        GermanLevel::A2 => 20,
        GermanLevel::A1 => 10,
        GermanLevel::None => 0,
    }
}

pub(crate) fn work_experience_points(experience: WorkExperience) -> u8 {
    match experience {
        WorkExperience::ThreePlus => 15,
        WorkExperience::OneToThree => 10,
        WorkExperience::LessThanOne => 5,
        WorkExperience::None => 0,
    }
}

pub(crate) fn breakdown(profile: &EligibilityProfile) -> ScoreBreakdown {
    let academic_score = academic_points(profile.score_type, profile.score);
    let english_score = english_points(profile.english_test, profile.english_score);
    let german_score = german_points(profile.german_level);
    let work_experience_score = work_experience_points(profile.work_experience);

    ScoreBreakdown {
        academic_score,
        english_score,
        german_score,
        work_experience_score,
        total_score: academic_score + english_score + german_score + work_experience_score,
    }
}

/// Tier thresholds are fixed constants, not tunable per call.
pub(crate) fn tier(total_score: u8) -> EligibilityLevel {
    if total_score >= PUBLIC_THRESHOLD {
        EligibilityLevel::PublicEligible
    } else if total_score >= PRIVATE_THRESHOLD {
        EligibilityLevel::PrivateEligible
    } else {
        EligibilityLevel::NeedsImprovement
    }
}
