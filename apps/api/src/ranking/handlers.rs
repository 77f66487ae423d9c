//! Axum route handlers for the Ranking API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::candidate::RankRequest;
use crate::ranking::pipeline::rank_candidates;
use crate::ranking::ranker::RankedResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<RankedResult>,
}

/// POST /rank
///
/// Scores every parsed candidate against the job description and returns them
/// best first, each with its breakdown, skill gaps and rank position.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let results =
        rank_candidates(state.embedder.as_ref(), state.audit_sink.as_ref(), &request).await?;

    Ok(Json(RankResponse { results }))
}
