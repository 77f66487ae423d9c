use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::ranking::embedder::DEFAULT_DIMENSION;

/// Process configuration loaded from environment variables.
///
/// Only the service shell is configurable. Scoring weights and the skill
/// taxonomy are compiled in.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of a text-embeddings-inference style server. Unset → in-process hashing.
    pub embedding_api_url: Option<String>,
    pub embedding_dimension: usize,
    /// JSON-lines audit file. Unset → audit records go to the tracing output.
    pub audit_log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            embedding_api_url: optional_env("EMBEDDING_API_URL"),
            embedding_dimension: match optional_env("EMBEDDING_DIMENSION") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("EMBEDDING_DIMENSION must be a positive integer")?,
                None => DEFAULT_DIMENSION,
            },
            audit_log_path: optional_env("AUDIT_LOG_PATH").map(PathBuf::from),
        })
    }
}

/// Reads `key`, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
