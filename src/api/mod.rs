use std::sync::Arc;

use axum::{routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    completion::{ChatCompletion, OpenAiClient},
    config::RelayConfig,
};

pub mod handlers;
pub mod types;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub completion: Arc<dyn ChatCompletion>,
}

impl AppState {
    /// State backed by the OpenAI-compatible client for `config`.
    pub fn new(config: RelayConfig) -> Self {
        let config = Arc::new(config);
        let completion = Arc::new(OpenAiClient::new(config.clone()));
        Self { config, completion }
    }

    pub fn with_completion(config: RelayConfig, completion: Arc<dyn ChatCompletion>) -> Self {
        Self {
            config: Arc::new(config),
            completion,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        // Any origin may call the tutor.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
