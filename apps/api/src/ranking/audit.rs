//! Audit trail — one digest-based record per ranking request.
//!
//! Records go to an `AuditSink`. Recording is best-effort: a failure is logged
//! and never reaches the caller of the ranking operation.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::candidate::RankRequest;
use crate::ranking::ranker::RankedResult;

pub const OPERATION_RANK: &str = "rank";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fairness figures attached to every record.
///
/// Not computed: the values are fixed at 1.0 and `computed` is always false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessMetrics {
    pub demographic_parity: f64,
    pub equalized_odds: f64,
    pub computed: bool,
}

impl FairnessMetrics {
    pub fn placeholder() -> Self {
        Self {
            demographic_parity: 1.0,
            equalized_odds: 1.0,
            computed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub audit_id: Uuid,
    #[serde(rename = "type")]
    pub operation: String,
    pub job_title: String,
    /// SHA-256 (hex) of the request as received.
    pub input_hash: String,
    /// SHA-256 (hex) of the ranked results.
    pub output_hash: String,
    pub candidate_count: usize,
    pub fairness_metrics: FairnessMetrics,
    pub recorded_at: DateTime<Utc>,
}

/// Hex SHA-256 of the compact JSON form of `value`.
///
/// JSON object keys inside `serde_json::Value` are kept sorted, so equal
/// inputs always hash equally.
pub fn digest<T: Serialize + ?Sized>(value: &T) -> Result<String, AuditError> {
    let bytes = serde_json::to_vec(value)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

pub fn build_rank_record(
    request: &RankRequest,
    ranked: &[RankedResult],
) -> Result<AuditRecord, AuditError> {
    Ok(AuditRecord {
        audit_id: Uuid::new_v4(),
        operation: OPERATION_RANK.to_string(),
        job_title: request.job_title.clone(),
        input_hash: digest(request)?,
        output_hash: digest(ranked)?,
        candidate_count: ranked.len(),
        fairness_metrics: FairnessMetrics::placeholder(),
        recorded_at: Utc::now(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Sinks
// ────────────────────────────────────────────────────────────────────────────

/// Append-only destination for audit records. Records are never read back.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError>;
}

/// Emits each record as a structured `info` event on the `audit` target.
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError> {
        info!(
            target: "audit",
            audit_id = %record.audit_id,
            operation = %record.operation,
            job_title = %record.job_title,
            input_hash = %record.input_hash,
            output_hash = %record.output_hash,
            candidate_count = record.candidate_count,
            demographic_parity = record.fairness_metrics.demographic_parity,
            equalized_odds = record.fairness_metrics.equalized_odds,
            fairness_computed = record.fairness_metrics.computed,
            "AUDIT"
        );
        Ok(())
    }
}

/// Appends one JSON line per record to a file, creating it if needed.
pub struct JsonlAuditSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl AuditSink for JsonlAuditSink {
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Builds and records the audit entry for a ranking request, swallowing failures.
pub async fn record_rank_best_effort(
    sink: &dyn AuditSink,
    request: &RankRequest,
    ranked: &[RankedResult],
) {
    let outcome = match build_rank_record(request, ranked) {
        Ok(record) => sink.record(&record).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        warn!(job_title = %request.job_title, "audit recording failed: {e}");
    }
}
