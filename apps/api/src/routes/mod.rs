pub mod handlers;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/api/analyze", post(handlers::handle_analyze))
        .route("/api/match", post(handlers::handle_match))
        .route("/api/essay/general", post(handlers::handle_general_essay))
        .route("/api/essay/specific", post(handlers::handle_specific_essay))
        .route("/api/chat", post(handlers::handle_chat))
        .with_state(state)
}
