//! HTTP server for javierad

use crate::chatbot::Chatbot;
use crate::ollama::OllamaClient;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub chatbot: Chatbot<OllamaClient>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(chatbot: Chatbot<OllamaClient>) -> Self {
        Self {
            chatbot,
            start_time: Instant::now(),
        }
    }
}

/// Build the full router for the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::ui_routes())
        .merge(routes::chat_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
