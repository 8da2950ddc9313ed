use super::super::domain::{
    EligibilityBadge, EligibilityLevel, EligibilityProfile, EnglishTest, ScoreBreakdown,
};

const WEAK_ACADEMIC: u8 = 30;
const WEAK_GERMAN: u8 = 20;
const WEAK_WORK: u8 = 10;

pub(crate) fn badge(level: EligibilityLevel) -> EligibilityBadge {
    match level {
        EligibilityLevel::PublicEligible => EligibilityBadge {
            label: level.label(),
            color: "green",
        },
        EligibilityLevel::PrivateEligible | EligibilityLevel::NeedsImprovement => {
            EligibilityBadge {
                label: level.label(),
                color: "amber",
            }
        }
    }
}

pub(crate) fn message(level: EligibilityLevel) -> &'static str {
    match level {
        EligibilityLevel::PublicEligible => {
            "Based on your academic qualifications and language proficiency, you meet the \
             general eligibility criteria for public universities in Germany."
        }
        EligibilityLevel::PrivateEligible => {
            "Your academic background meets general requirements. Additional steps may be \
             needed such as improving language proficiency before targeting public programs."
        }
        EligibilityLevel::NeedsImprovement => {
            "Your profile would benefit from strengthening in certain areas. Our counsellors \
             can help you explore pathways to meet university requirements."
        }
    }
}

/// Rule-ordered advisory list, zero to five items. The ordering is part of
/// the contract: weakest-component advice first, consultation prompt last.
pub(crate) fn recommendations(
    profile: &EligibilityProfile,
    breakdown: &ScoreBreakdown,
    level: EligibilityLevel,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if breakdown.academic_score < WEAK_ACADEMIC {
        recommendations.push(
            "Strengthen your academic profile; many public programs expect 70%+ or CGPA 7.0+"
                .to_string(),
        );
    }

    if profile.english_test == EnglishTest::None {
        recommendations.push(
            "Take an English proficiency test (IELTS 6.0+ or TOEFL 80+ recommended)".to_string(),
        );
    }

    if breakdown.german_score < WEAK_GERMAN {
        recommendations
            .push("Start German language courses; B1 or higher widens program options".to_string());
    }

    if breakdown.work_experience_score < WEAK_WORK && level != EligibilityLevel::PublicEligible {
        recommendations.push(
            "Gain work experience through internships or projects to strengthen your application"
                .to_string(),
        );
    }

    if level == EligibilityLevel::NeedsImprovement {
        recommendations
            .push("Book a consultation with our counsellors for an improvement plan".to_string());
    }

    recommendations
}

/// Fixed checklist keyed only by tier, never by the breakdown.
pub(crate) fn next_steps(level: EligibilityLevel) -> Vec<&'static str> {
    match level {
        EligibilityLevel::PublicEligible => vec![
            "Complete APS verification process",
            "Prepare admission documents (SOP, LOR, CV)",
            "Research and shortlist universities",
            "Begin university applications",
        ],
        EligibilityLevel::PrivateEligible => vec![
            "Complete missing requirements (language tests, etc.)",
            "Book consultation for personalized guidance",
            "Explore suitable university programs",
            "Prepare required documents",
        ],
        EligibilityLevel::NeedsImprovement => vec![
            "Book a free consultation to assess your options",
            "Understand specific gaps in your profile",
            "Create an improvement action plan",
            "Consider alternative pathways to German education",
        ],
    }
}
