use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;

/// Body of `POST /rank`.
///
/// Candidates stay as raw JSON until [`RankRequest::candidate_profiles`] so that
/// a malformed optional field degrades to its default instead of rejecting the
/// whole batch. The request is also hashed verbatim for the audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    pub job_title: String,
    pub job_description: String,
    #[serde(default)]
    pub parsed_candidates: Vec<Value>,
}

/// Declared skills as emitted by the upstream resume parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSkills {
    pub technical: Vec<String>,
}

/// A pre-parsed candidate profile. Owned by the caller; scoring only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub raw_text: String,
    pub skills: CandidateSkills,
    /// Always finite and non-negative once built via `from_json`.
    pub experience_years: f64,
}

impl RankRequest {
    /// Converts every raw candidate into a `CandidateProfile`.
    ///
    /// Only a candidate that is not a JSON object is rejected; anything inside
    /// the object that is missing or has the wrong shape falls back to a default.
    pub fn candidate_profiles(&self) -> Result<Vec<CandidateProfile>, AppError> {
        self.parsed_candidates
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if !value.is_object() {
                    return Err(AppError::Validation(format!(
                        "parsed_candidates[{index}] must be an object"
                    )));
                }
                Ok(CandidateProfile::from_json(index, value))
            })
            .collect()
    }
}

impl CandidateProfile {
    pub fn from_json(index: usize, value: &Value) -> Self {
        Self {
            raw_text: read_raw_text(index, value.get("raw_text")),
            skills: CandidateSkills {
                technical: read_technical_skills(index, value.get("skills")),
            },
            experience_years: read_experience_years(index, value.get("experience_years")),
        }
    }
}

fn read_raw_text(index: usize, value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            warn!(candidate_index = index, "raw_text is not a string; using empty text");
            String::new()
        }
    }
}

fn read_technical_skills(index: usize, value: Option<&Value>) -> Vec<String> {
    let technical = match value {
        None | Some(Value::Null) => return vec![],
        Some(Value::Object(skills)) => skills.get("technical"),
        Some(_) => {
            warn!(candidate_index = index, "skills is not an object; using no skills");
            return vec![];
        }
    };

    match technical {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(_) => {
            warn!(candidate_index = index, "skills.technical is not a list; using no skills");
            vec![]
        }
    }
}

fn read_experience_years(index: usize, value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(raw) => match raw.as_f64() {
            Some(years) if years.is_finite() && years >= 0.0 => years,
            _ => {
                warn!(
                    candidate_index = index,
                    value = %raw,
                    "experience_years is not a non-negative number; using 0"
                );
                0.0
            }
        },
    }
}
