//! Skill extraction — required skills from a JD and overlap/gap analysis per candidate.
//!
//! Only tokens in the canonical taxonomy count. The taxonomy is compiled in and
//! never mutated, so it is shared across concurrent requests without locking.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Recognized technical skill tokens (lowercase).
pub const CANONICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "tensorflow",
    "pytorch",
    "react",
    "nodejs",
    "fastapi",
    "flask",
];

/// Gaps kept for the `skill_match` denominator.
pub const MAX_ANALYZED_GAPS: usize = 10;
/// Gaps surfaced to the caller in `skill_gaps`.
pub const MAX_REPORTED_GAPS: usize = 5;
/// Overlapping skills named in the strengths line.
pub const MAX_LISTED_STRENGTHS: usize = 5;

pub const GENERAL_FIT: &str = "General fit";

static TAXONOMY: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| CANONICAL_SKILLS.iter().copied().collect());

// `+`, `#` and `.` are kept so "c++", "c#" and "node.js" survive tokenization.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z+#.]+").expect("invalid skill token regex"));

/// Taxonomy skills mentioned anywhere in the job description, sorted.
pub fn required_skills(job_description: &str) -> BTreeSet<&'static str> {
    let lowered = job_description.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .filter_map(|token| TAXONOMY.get(token.as_str()).copied())
        .collect()
}

/// Result of comparing a candidate's declared skills against the required set.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillAnalysis {
    /// Required skills the candidate declares, sorted.
    pub overlap: Vec<String>,
    /// Required skills the candidate lacks, sorted, at most `MAX_ANALYZED_GAPS`.
    pub gaps: Vec<String>,
}

impl SkillAnalysis {
    /// Unrounded `|overlap| / max(1, |overlap| + |gaps|)`.
    pub fn skill_match(&self) -> f64 {
        let matched = self.overlap.len();
        matched as f64 / (matched + self.gaps.len()).max(1) as f64
    }

    /// Gaps as reported to the caller: a second cap on top of `MAX_ANALYZED_GAPS`.
    pub fn reported_gaps(&self) -> Vec<String> {
        self.gaps.iter().take(MAX_REPORTED_GAPS).cloned().collect()
    }

    /// Human-readable strengths. Never empty.
    pub fn strengths(&self) -> Vec<String> {
        if self.overlap.is_empty() {
            return vec![GENERAL_FIT.to_string()];
        }

        let listed: Vec<&str> = self
            .overlap
            .iter()
            .take(MAX_LISTED_STRENGTHS)
            .map(String::as_str)
            .collect();
        vec![format!("Technical overlap: {}", listed.join(", "))]
    }
}

/// Compares declared skills (matched case-insensitively) against `required`.
pub fn analyze_skills(required: &BTreeSet<&'static str>, declared: &[String]) -> SkillAnalysis {
    let declared: BTreeSet<String> = declared.iter().map(|s| s.to_lowercase()).collect();

    let overlap = required
        .iter()
        .filter(|skill| declared.contains(**skill))
        .map(|skill| skill.to_string())
        .collect();

    let gaps = required
        .iter()
        .filter(|skill| !declared.contains(**skill))
        .take(MAX_ANALYZED_GAPS)
        .map(|skill| skill.to_string())
        .collect();

    SkillAnalysis { overlap, gaps }
}
