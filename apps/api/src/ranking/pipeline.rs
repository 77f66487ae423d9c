//! Ranking pipeline — orchestrates one rank request end to end.
//!
//! Flow: candidate_profiles → required_skills → anonymize → embed (one batch) →
//!       score_candidate (per candidate) → rank → audit (best effort).

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::candidate::RankRequest;
use crate::ranking::anonymizer::anonymize_text;
use crate::ranking::audit::{record_rank_best_effort, AuditSink};
use crate::ranking::embedder::{check_embeddings, Embedder};
use crate::ranking::ranker::{rank, RankedResult};
use crate::ranking::scoring::{score_candidate, CandidateScore};
use crate::ranking::skills::required_skills;

/// Scores and ranks every candidate of `request` against its job description.
///
/// An embedder failure fails the whole request. An audit failure does not.
pub async fn rank_candidates(
    embedder: &dyn Embedder,
    audit_sink: &dyn AuditSink,
    request: &RankRequest,
) -> Result<Vec<RankedResult>, AppError> {
    let profiles = request.candidate_profiles()?;
    info!(
        job_title = %request.job_title,
        candidates = profiles.len(),
        embedder = embedder.name(),
        "ranking candidates"
    );

    let mut scores: Vec<CandidateScore> = Vec::with_capacity(profiles.len());

    if !profiles.is_empty() {
        let required = required_skills(&request.job_description);

        // Slot 0 is the job description; slot i + 1 is candidate i.
        let mut texts = Vec::with_capacity(profiles.len() + 1);
        texts.push(request.job_description.clone());
        texts.extend(profiles.iter().map(|p| anonymize_text(&p.raw_text)));

        let vectors = embedder.embed(&texts).await?;
        check_embeddings(texts.len(), &vectors)?;

        let job_vector = &vectors[0];
        for (index, (profile, candidate_vector)) in profiles.iter().zip(&vectors[1..]).enumerate() {
            let score = score_candidate(index, profile, &required, job_vector, candidate_vector);
            debug!(
                candidate_index = index,
                overall_score = score.overall_score,
                semantic = score.breakdown.semantic,
                skill_match = score.breakdown.skill_match,
                "scored candidate"
            );
            scores.push(score);
        }
    }

    let ranked = rank(scores);
    record_rank_best_effort(audit_sink, request, &ranked).await;

    Ok(ranked)
}
