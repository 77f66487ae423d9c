//! Embedder — pluggable, trait-based text → vector backend.
//!
//! Default: `HashEmbedder` (in-process, deterministic feature hashing).
//! Optional: `HttpEmbedder` (text-embeddings-inference style `/embed` endpoint).
//!
//! `AppState` holds an `Arc<dyn Embedder>`, chosen at startup via config.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("expected {expected} embeddings, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("embedding {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Maps an ordered batch of texts to one vector per text, in the same order.
/// All vectors of one call share a dimension.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Backend label for logs ("hash", "http").
    fn name(&self) -> &'static str;

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

/// Checks that a backend honoured the contract for a batch of `expected` texts.
pub fn check_embeddings(expected: usize, vectors: &[Vec<f32>]) -> Result<(), EmbeddingError> {
    if vectors.len() != expected {
        return Err(EmbeddingError::CountMismatch {
            expected,
            actual: vectors.len(),
        });
    }

    if let Some(first) = vectors.first() {
        let dimension = first.len();
        if let Some((index, vector)) = vectors
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != dimension)
        {
            return Err(EmbeddingError::DimensionMismatch {
                index,
                expected: dimension,
                actual: vector.len(),
            });
        }
    }

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// HashEmbedder — default backend
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_DIMENSION: usize = 384;

/// Bag-of-tokens feature hashing, L2-normalised.
///
/// Every token adds a positive count to one bucket chosen by SHA-256, so all
/// components are non-negative and cosine similarity between two outputs stays
/// in [0, 1]. Text with no tokens embeds to the zero vector.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn bucket(&self, token: &str) -> usize {
        let digest = Sha256::digest(token.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        (u64::from_le_bytes(prefix) % self.dimension as u64) as usize
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in tokenize(text) {
            vector[self.bucket(&token)] += 1.0;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|token| token.trim_matches('.').to_lowercase())
        .filter(|token| !token.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// HttpEmbedder — remote inference server
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [String],
}

/// Calls `POST {base_url}/embed` with `{"inputs": [...]}` and expects a JSON
/// array of vectors back. One attempt per batch; failures go straight to the caller.
#[derive(Clone)]
pub struct HttpEmbedder {
    client: Client,
    base_url: String,
}

impl HttpEmbedder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/embed", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&EmbedRequest { inputs: texts })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let vectors: Vec<Vec<f32>> = response.json().await?;
        debug!(count = vectors.len(), "embedding server returned vectors");
        Ok(vectors)
    }
}
