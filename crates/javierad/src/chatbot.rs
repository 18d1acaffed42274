//! The filter-then-generate pipeline.
//!
//! One question in, one answer out, no state between calls. Restricted
//! questions are refused before any model call; generation failures of any
//! kind collapse to a single friendly fallback so no internal error ever
//! reaches the user.

use crate::config::LlmConfig;
use crate::ollama::{GenerateError, OllamaClient};
use crate::privacy::is_restricted;
use crate::prompt::build_prompt;
use std::future::Future;
use tracing::{info, warn};

/// Returned verbatim when the privacy filter trips. No model call is made.
pub const REFUSAL_MESSAGE: &str = "I appreciate your interest, but I prefer to keep that \
    information private and focus on professional topics. Is there anything else about my \
    background or experience you'd like to know?";

/// Returned verbatim when generation fails for any reason.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I had a bit of a technical hiccup there! Could you try asking that again?";

/// Seam between the pipeline and the text-generation backend.
pub trait Generate {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerateError>> + Send;
}

impl Generate for OllamaClient {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerateError>> + Send {
        OllamaClient::generate(self, prompt)
    }
}

/// The chatbot: an immutable profile plus a generation backend.
pub struct Chatbot<G> {
    profile: String,
    generator: G,
}

impl Chatbot<OllamaClient> {
    /// Build the production chatbot backed by the local Ollama service.
    pub fn new(profile: String, llm: &LlmConfig) -> Result<Self, GenerateError> {
        Ok(Self {
            profile,
            generator: OllamaClient::new(llm)?,
        })
    }

    pub fn ollama(&self) -> &OllamaClient {
        &self.generator
    }
}

impl<G: Generate> Chatbot<G> {
    #[cfg(test)]
    fn with_generator(profile: String, generator: G) -> Self {
        Self { profile, generator }
    }

    /// Answer one question.
    ///
    /// Always returns a user-facing string: the refusal message, the
    /// trimmed model output, or the fallback message. Never errors.
    pub async fn respond(&self, question: &str) -> String {
        if is_restricted(question) {
            info!("Question refused by privacy filter");
            return REFUSAL_MESSAGE.to_string();
        }

        let prompt = build_prompt(&self.profile, question);

        match self.generator.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Generation failed: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
