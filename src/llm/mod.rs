//! Generative fallback for questions no topic intent covers.
//!
//! This module provides:
//! * [`TextGenerator`] — async trait implemented by all model backends.
//! * [`ApiGenerator`] — Gemini / OpenAI-compatible REST client.
//! * [`GenerativeResponder`] — wraps an optional generator; returns an
//!   apology literal on failure.
//! * [`PromptBuilder`] — builds the language-selecting system instruction.
//! * [`LlmError`] — error variants for model calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use uni_assistant_bot::config::AppConfig;
//! use uni_assistant_bot::lang::Language;
//! use uni_assistant_bot::llm::GenerativeResponder;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::load().unwrap_or_default();
//!     let responder = GenerativeResponder::from_config(&config);
//!
//!     let answer = responder.answer("Where is the library?", Language::NonThai).await;
//!     println!("{answer}");
//! }
//! ```

pub mod fallback;
pub mod generator;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use fallback::GenerativeResponder;
pub use generator::{ApiGenerator, LlmError, TextGenerator};
pub use prompt::PromptBuilder;
