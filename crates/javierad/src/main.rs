//! Javiera Chat Daemon
//!
//! Answers questions about Javiera's professional background through a
//! privacy-filtered prompt to a local Ollama model.

use anyhow::Result;
use javierad::chatbot::Chatbot;
use javierad::config::{self, Config};
use javierad::server::{self, AppState};
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("javierad v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    let profile = config::load_profile();
    if profile.is_empty() {
        warn!("Running with an empty profile; answers will be thin");
    } else {
        info!("Profile loaded ({} chars)", profile.len());
    }

    let chatbot = Chatbot::new(profile, &config.llm)?;

    if chatbot.ollama().is_running().await {
        info!("Ollama reachable, model {}", config.llm.model);
    } else {
        warn!(
            "Ollama not reachable at {}; questions will get the fallback answer",
            config.llm.ollama_url
        );
    }

    let state = AppState::new(chatbot);
    server::run(state, &config.server.bind).await
}
