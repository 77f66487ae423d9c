//! Composite scoring — semantic similarity and experience folded into one score.
//!
//! overall = 0.7 * semantic + 0.3 * min(experience_years / 8, 1)
//!
//! Weights and the experience cap are fixed policy, not configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;
use crate::ranking::similarity::cosine_similarity;
use crate::ranking::skills::analyze_skills;

pub const SEMANTIC_WEIGHT: f64 = 0.7;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;
pub const EXPERIENCE_CAP_YEARS: f64 = 8.0;

/// Per-dimension scores, each rounded to 3 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub semantic: f64,
    pub experience_relevance: f64,
    pub skill_match: f64,
}

/// Score and explanation for one candidate of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Position in the request batch; stable identity through ranking.
    pub candidate_index: usize,
    pub overall_score: f64,
    #[serde(rename = "scoring_breakdown")]
    pub breakdown: ScoreBreakdown,
    pub skill_gaps: Vec<String>,
    pub strengths: Vec<String>,
}

pub fn experience_relevance(experience_years: f64) -> f64 {
    (experience_years / EXPERIENCE_CAP_YEARS).min(1.0)
}

/// Weighted sum of unrounded inputs. The semantic value is taken as-is, so a
/// negative cosine from the embedder pulls the score below zero.
pub fn composite_score(semantic: f64, experience_relevance: f64) -> f64 {
    SEMANTIC_WEIGHT * semantic + EXPERIENCE_WEIGHT * experience_relevance
}

/// Rounds to 3 decimals, ties to even on the exact binary value.
///
/// The formatter rounds the exact value, so 0.0625 becomes 0.062. A zero
/// result is always `+0.0`.
pub fn round3(value: f64) -> f64 {
    let rounded = format!("{value:.3}").parse::<f64>().unwrap_or(value);
    rounded + 0.0
}

/// Scores one anonymized candidate against the job.
///
/// `job_vector` and `candidate_vector` come from the same embedder call;
/// `required` is the JD's required-skill set, computed once per request.
pub fn score_candidate(
    candidate_index: usize,
    profile: &CandidateProfile,
    required: &BTreeSet<&'static str>,
    job_vector: &[f32],
    candidate_vector: &[f32],
) -> CandidateScore {
    let semantic = cosine_similarity(job_vector, candidate_vector);
    let experience = experience_relevance(profile.experience_years);
    let skills = analyze_skills(required, &profile.skills.technical);

    CandidateScore {
        candidate_index,
        overall_score: round3(composite_score(semantic, experience)),
        breakdown: ScoreBreakdown {
            semantic: round3(semantic),
            experience_relevance: round3(experience),
            skill_match: round3(skills.skill_match()),
        },
        skill_gaps: skills.reported_gaps(),
        strengths: skills.strengths(),
    }
}
