pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::ranking::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("No route for {uri}")))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Ranking API
        .route("/rank", post(handlers::handle_rank))
        .route("/api/v1/rank", post(handlers::handle_rank))
        .fallback(not_found)
        .with_state(state)
}
