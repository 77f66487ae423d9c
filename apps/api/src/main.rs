mod config;
mod errors;
mod models;
mod ranking;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ranking::audit::{AuditSink, JsonlAuditSink, TracingAuditSink};
use crate::ranking::embedder::{Embedder, HashEmbedder, HttpEmbedder};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},audit=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recruit API v{}", env!("CARGO_PKG_VERSION"));

    let embedder = build_embedder(&config);
    info!("Embedder initialized (backend: {})", embedder.name());

    let audit_sink = build_audit_sink(&config);

    let state = AppState {
        embedder,
        audit_sink,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Remote embedding server when configured, otherwise in-process feature hashing.
fn build_embedder(config: &Config) -> Arc<dyn Embedder> {
    match &config.embedding_api_url {
        Some(url) => {
            info!("Using embedding server at {url}");
            Arc::new(HttpEmbedder::new(url.clone()))
        }
        None => {
            let embedder = HashEmbedder::new(config.embedding_dimension);
            info!("Using hashing embedder (dimension {})", embedder.dimension());
            Arc::new(embedder)
        }
    }
}

fn build_audit_sink(config: &Config) -> Arc<dyn AuditSink> {
    match &config.audit_log_path {
        Some(path) => {
            info!("Audit records appended to {}", path.display());
            Arc::new(JsonlAuditSink::new(path.clone()))
        }
        None => Arc::new(TracingAuditSink),
    }
}
