mod advice;
mod rules;

pub use rules::{
    ACADEMIC_MAX, ENGLISH_MAX, GERMAN_MAX, PRIVATE_THRESHOLD, PUBLIC_THRESHOLD,
    WORK_EXPERIENCE_MAX,
};

use super::domain::{EligibilityProfile, EligibilityResult};

/// Compute the readiness score, tier, and advisory lists for a validated
/// profile. Pure and total: every validated profile scores without error,
/// and equal inputs always produce bit-identical results.
pub fn score(profile: &EligibilityProfile) -> EligibilityResult {
    let breakdown = rules::breakdown(profile);
    let level = rules::tier(breakdown.total_score);

    EligibilityResult {
        breakdown,
        level,
        badge: advice::badge(level),
        message: advice::message(level),
        recommendations: advice::recommendations(profile, &breakdown, level),
        next_steps: advice::next_steps(level),
    }
}
