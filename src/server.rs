use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::handlers;
use crate::llm::LLMProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn LLMProvider>,
}

pub fn build_app(state: AppState) -> Router {
    // Credentialed CORS cannot use the wildcard origin header, so the
    // request origin is mirrored instead.
    Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
