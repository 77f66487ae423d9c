use std::cmp::Ordering;

use serde::Serialize;

use crate::ranking::scoring::CandidateScore;

/// A scored candidate with its 1-based position in the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub score: CandidateScore,
    pub rank_position: usize,
}

/// Orders scores by `overall_score` descending and numbers them from 1.
///
/// The sort is stable, so equal scores keep their batch order (`-0.0` equals
/// `0.0`). Nothing is re-scored.
pub fn rank(mut scores: Vec<CandidateScore>) -> Vec<RankedResult> {
    scores.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(Ordering::Equal)
    });

    scores
        .into_iter()
        .enumerate()
        .map(|(i, score)| RankedResult {
            score,
            rank_position: i + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::scoring::ScoreBreakdown;

    fn score(candidate_index: usize, overall_score: f64) -> CandidateScore {
        CandidateScore {
            candidate_index,
            overall_score,
            breakdown: ScoreBreakdown {
                semantic: overall_score,
                experience_relevance: 0.0,
                skill_match: 0.0,
            },
            skill_gaps: vec![],
            strengths: vec!["General fit".to_string()],
        }
    }

    fn indices(ranked: &[RankedResult]) -> Vec<usize> {
        ranked.iter().map(|r| r.score.candidate_index).collect()
    }

    #[test]
    fn test_ties_keep_batch_order() {
        let ranked = rank(vec![score(0, 0.2), score(1, 0.9), score(2, 0.9)]);

        assert_eq!(indices(&ranked), vec![1, 2, 0]);
        let positions: Vec<usize> = ranked.iter().map(|r| r.rank_position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let ranked = rank(vec![score(0, -0.0), score(1, 0.0), score(2, 0.1)]);
        assert_eq!(indices(&ranked), vec![2, 0, 1]);
    }

    #[test]
    fn test_slightly_negative_similarity_ties_with_zero() {
        use crate::ranking::scoring::{composite_score, round3};

        let ranked = rank(vec![
            score(0, round3(composite_score(-0.0004, 0.0))),
            score(1, round3(composite_score(0.0, 0.0))),
        ]);
        assert_eq!(indices(&ranked), vec![0, 1]);
    }

    #[test]
    fn test_sorts_descending() {
        let ranked = rank(vec![score(0, 0.1), score(1, 0.5), score(2, 0.3), score(3, 0.7)]);
        assert_eq!(indices(&ranked), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_positions_are_contiguous_from_one() {
        let scores: Vec<CandidateScore> = (0..25).map(|i| score(i, ((i * 7) % 5) as f64 / 10.0)).collect();
        let ranked = rank(scores);

        let mut positions: Vec<usize> = ranked.iter().map(|r| r.rank_position).collect();
        positions.sort_unstable();
        assert_eq!(positions, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_equal_scores_preserve_input_order() {
        let ranked = rank((0..6).map(|i| score(i, 0.5)).collect());
        assert_eq!(indices(&ranked), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_batch() {
        assert!(rank(vec![]).is_empty());
    }

    #[test]
    fn test_serializes_flat_with_rank_position() {
        let ranked = rank(vec![score(4, 0.8)]);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["candidate_index"], 4);
        assert_eq!(json["rank_position"], 1);
        assert_eq!(json["overall_score"], 0.8);
    }
}
