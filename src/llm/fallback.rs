//! Generative answers that never fail.
//!
//! [`GenerativeResponder`] wraps an optional [`TextGenerator`].  When no
//! generator is configured, or the call fails for any reason (`Request`,
//! `Timeout`, `Status`, `Parse`, `EmptyResponse`), it returns an apology in
//! the user's language instead of propagating the error.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::lang::Language;
use crate::llm::generator::{ApiGenerator, TextGenerator};
use crate::llm::prompt::PromptBuilder;
use crate::messages;

/// Answers open-ended questions, degrading to apology literals.
#[derive(Clone)]
pub struct GenerativeResponder {
    generator: Option<Arc<dyn TextGenerator>>,
    prompt: PromptBuilder,
}

impl GenerativeResponder {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, prompt: PromptBuilder) -> Self {
        Self { generator, prompt }
    }

    /// Build from application config.  Unusable LLM settings produce a
    /// responder without a generator.
    pub fn from_config(config: &AppConfig) -> Self {
        let prompt = PromptBuilder::new(config.bot.name.clone());
        if !config.llm.is_usable() {
            log::warn!(
                "Generative model not configured ({:?}); open-ended questions will get an apology",
                config.llm.provider
            );
            return Self::new(None, prompt);
        }
        let generator: Arc<dyn TextGenerator> = Arc::new(ApiGenerator::from_config(&config.llm));
        Self::new(Some(generator), prompt)
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_some()
    }

    /// Answer `message` in `language`.  Never returns an empty string.
    pub async fn answer(&self, message: &str, language: Language) -> String {
        let Some(generator) = &self.generator else {
            return messages::generator_offline(language).to_string();
        };

        let system = self.prompt.system_instruction(language);
        match generator.generate(&system, message).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                log::warn!("Generative model returned blank text (len={})", message.len());
                messages::generator_failed(language).to_string()
            }
            Err(e) => {
                log::error!("Error generating response: {e}");
                messages::generator_failed(language).to_string()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
