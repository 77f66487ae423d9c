//! Test doubles for the embedder and audit sink seams.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ranking::audit::{AuditError, AuditRecord, AuditSink};
use crate::ranking::embedder::{Embedder, EmbeddingError};

/// Returns a fixed vector per text and remembers every batch it was asked for.
pub struct StubEmbedder {
    default: Vec<f32>,
    vectors: HashMap<String, Vec<f32>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl StubEmbedder {
    pub fn new(default: Vec<f32>) -> Self {
        Self {
            default,
            vectors: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.lock().unwrap().push(texts.to_vec());
        Ok(texts
            .iter()
            .map(|t| self.vectors.get(t).unwrap_or(&self.default).clone())
            .collect())
    }
}

/// Always fails with an API error.
pub struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::Api {
            status: 503,
            message: "model not loaded".to_string(),
        })
    }
}

/// Returns one vector too few.
pub struct ShortEmbedder;

#[async_trait]
impl Embedder for ShortEmbedder {
    fn name(&self) -> &'static str {
        "short"
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0, 0.0]).collect())
    }
}

#[derive(Default)]
pub struct RecordingAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl RecordingAuditSink {
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditSink for RecordingAuditSink {
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct FailingAuditSink;

#[async_trait]
impl AuditSink for FailingAuditSink {
    async fn record(&self, _record: &AuditRecord) -> Result<(), AuditError> {
        Err(AuditError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "audit log is read-only",
        )))
    }
}
