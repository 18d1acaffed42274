//! API routes for javierad
//!
//! One business route (/v1/chat), a health route, and the embedded web
//! widget at /. The chat handler never returns an error status: refusals
//! and generation failures both come back as 200 with a friendly string.

use crate::server::AppState;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

/// Static example questions shown in the widget
pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "Tell me about yourself",
    "What's your background?",
    "How did you get into tech?",
    "Where have you lived?",
];

/// Widget title
pub const TITLE: &str = "\u{1F44B} Chat with Me!";

/// Widget description
pub const DESCRIPTION: &str = "I'm Javiera! I'm happy to chat about my professional journey, \
    my international experiences, and what I'm looking for in my next role. Ask me anything!";

// ============================================================================
// Chat Routes
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

pub fn chat_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/chat", post(chat))
}

async fn chat(
    State(state): State<AppStateArc>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    info!("  Chat question ({} chars)", req.question.len());

    let answer = state.chatbot.respond(&req.question).await;

    Json(ChatResponse { answer })
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub ollama_running: bool,
    pub uptime_secs: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let ollama_running = state.chatbot.ollama().is_running().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.chatbot.ollama().model().to_string(),
        ollama_running,
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

// ============================================================================
// Web Widget
// ============================================================================

pub fn ui_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(index))
        .route("/v1/meta", get(meta))
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Static strings the widget renders: title, description, examples.
#[derive(Debug, Clone, Serialize)]
pub struct MetaResponse {
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

async fn meta() -> Json<MetaResponse> {
    Json(MetaResponse {
        title: TITLE.to_string(),
        description: DESCRIPTION.to_string(),
        examples: EXAMPLE_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}
