use std::sync::Arc;

use crate::ranking::audit::AuditSink;
use crate::ranking::embedder::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable embedder. Default: HashEmbedder. Swap via EMBEDDING_API_URL.
    pub embedder: Arc<dyn Embedder>,
    /// Where audit records go. Default: tracing events. Swap via AUDIT_LOG_PATH.
    pub audit_sink: Arc<dyn AuditSink>,
}
