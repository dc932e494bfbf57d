//! Bilingual (Thai / English) FAQ responder for a university chatbot.
//!
//! Incoming text is classified as Thai or not, routed to a topic by keyword,
//! and answered from a JSON catalog of localized answers.  Questions that
//! match no topic go to a generative model.  Every path ends in a readable
//! sentence in the user's language, even when the catalog or the model is
//! unavailable.

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod lang;
pub mod llm;
pub mod messages;
pub mod router;
pub mod session;
pub mod suggestions;

pub use assistant::Assistant;
pub use catalog::{Catalog, ResponseResolver};
pub use lang::{is_thai_text, Language};
pub use router::{IntentRouter, ResponseSpec};
