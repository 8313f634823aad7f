//! Deterministic candidate-vacancy compatibility scoring.

use std::collections::HashSet;

use crate::models::resume::CandidateProfile;
use crate::models::vacancy::NormalizedVacancy;

/// Weight of skill overlap in the final score.
const SKILL_WEIGHT: f64 = 70.0;
/// Weight of the experience requirement in the final score.
const EXPERIENCE_WEIGHT: f64 = 30.0;

/// Match chance of one candidate against one vacancy, in [0, 100] with one
/// decimal place.
///
/// An unavailable profile scores 0 against everything, and a vacancy that
/// states no required skills cannot be matched against at all. Otherwise the
/// skill part is the covered fraction of the vacancy's skill set scaled to
/// 70, and the experience part is 30 when the requirement is met or a
/// proportional fraction of 30 when it is not.
pub fn match_chance(profile: &CandidateProfile, vacancy: &NormalizedVacancy) -> f64 {
    if profile.is_unavailable() {
        return 0.0;
    }

    let required: HashSet<String> = vacancy
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    if required.is_empty() {
        return 0.0;
    }

    let held: HashSet<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
    let overlap = required.intersection(&held).count();
    let skill_score = overlap as f64 / required.len() as f64 * SKILL_WEIGHT;

    let experience_score = if profile.experience_years >= vacancy.experience_required {
        EXPERIENCE_WEIGHT
    } else if vacancy.experience_required > 0 {
        f64::from(profile.experience_years) / f64::from(vacancy.experience_required)
            * EXPERIENCE_WEIGHT
    } else {
        0.0
    };

    round_one_decimal(skill_score + experience_score)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
