//! Configuration management for javierad.
//!
//! Loads settings from /etc/javierad/config.toml or uses defaults. The
//! profile text itself is not configuration: it comes from the
//! JAVIERA_PROFILE environment variable, read once at startup.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/javierad/config.toml";

/// Default config file path for fallback
pub const DEFAULT_CONFIG_PATH: &str = "/var/lib/javierad/config.toml";

/// Environment variable holding the profile text
pub const PROFILE_ENV: &str = "JAVIERA_PROFILE";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the widget and chat API bind to
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    // Localhost only; this is a local demo, not a public service
    "127.0.0.1:7878".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the local Ollama service
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,

    /// Model used for every response
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Top-k sampling cutoff
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Top-p nucleus sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_ollama_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_model() -> String {
    "llama3.2:1b".to_string()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_top_k() -> u32 {
    20
}

fn default_top_p() -> f64 {
    0.5
}

fn default_timeout() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            ollama_url: default_ollama_url(),
            model: default_model(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub llm: LlmConfig,
}

impl Config {
    /// Load config from file, or return defaults
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_PATH)
            .or_else(|_| Self::load_from_path(DEFAULT_CONFIG_PATH))
            .unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {}", e);
                Config::default()
            })
    }

    /// Load config from specific path
    fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path);
        Ok(config)
    }
}

/// Read the profile text from the environment.
///
/// An absent variable degrades to an empty profile rather than an error;
/// the chatbot still runs, it just has nothing to talk about.
pub fn load_profile() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) => profile,
        Err(_) => {
            warn!("{} not set, profile is empty", PROFILE_ENV);
            String::new()
        }
    }
}
