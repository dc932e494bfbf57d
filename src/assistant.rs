//! Front door shared by every chat front-end.
//!
//! ```text
//! raw text ─▶ IntentRouter ─┬─ Greeting / Help ─▶ literal
//!                           ├─ LocalLookup ─────▶ ResponseResolver ─▶ catalog answer
//!                           └─ Generative ──────▶ GenerativeResponder ─▶ model answer
//! ```
//!
//! Each call returns exactly one non-empty string in the user's language.
//! No error crosses this boundary.

use crate::catalog::{Catalog, ResponseResolver};
use crate::config::AppConfig;
use crate::lang::Language;
use crate::llm::GenerativeResponder;
use crate::messages;
use crate::router::{IntentRouter, ResponseSpec};

/// Owns the loaded catalog and answers user messages.
///
/// Holds no per-conversation state; one instance can serve any number of
/// sessions, e.g. behind an `Arc`.
#[derive(Clone)]
pub struct Assistant {
    catalog: Catalog,
    router: IntentRouter,
    responder: GenerativeResponder,
}

impl Assistant {
    pub fn new(catalog: Catalog, responder: GenerativeResponder) -> Self {
        Self {
            catalog,
            router: IntentRouter::new(),
            responder,
        }
    }

    /// Load the catalog and build the generative responder from `config`.
    ///
    /// Never fails: a bad catalog becomes an empty one and missing model
    /// settings disable generative answers.
    pub fn from_config(config: &AppConfig) -> Self {
        let catalog = Catalog::load(&config.catalog.path);
        let responder = GenerativeResponder::from_config(config);
        Self::new(catalog, responder)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolver(&self) -> ResponseResolver<'_> {
        ResponseResolver::new(&self.catalog)
    }

    pub fn generative_available(&self) -> bool {
        self.responder.is_available()
    }

    pub fn route(&self, message: &str) -> ResponseSpec {
        self.router.route(message)
    }

    pub fn greeting(&self, language: Language) -> &'static str {
        messages::greeting(language)
    }

    /// Topics the bot answers from the catalog, in `language`.
    pub fn help_menu(&self, language: Language) -> &'static str {
        messages::help_menu(language)
    }

    /// Produce the answer for an already-routed message.
    pub async fn respond(&self, spec: ResponseSpec) -> String {
        match spec {
            ResponseSpec::Greeting { want_thai } => {
                self.greeting(Language::from_thai_flag(want_thai)).to_string()
            }
            ResponseSpec::Help { want_thai } => {
                self.help_menu(Language::from_thai_flag(want_thai)).to_string()
            }
            ResponseSpec::LocalLookup {
                path, want_thai, ..
            } => self.resolver().resolve(path, want_thai),
            ResponseSpec::Generative {
                want_thai,
                raw_message,
            } => {
                self.responder
                    .answer(&raw_message, Language::from_thai_flag(want_thai))
                    .await
            }
        }
    }

    /// Route and answer `message`.
    pub async fn handle_message(&self, message: &str) -> String {
        let spec = self.route(message);
        self.respond(spec).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
