//! System instruction for open-ended questions.
//!
//! The model is told who it is and which language to answer in; the user's
//! message is passed through untouched as the user turn.

use crate::lang::Language;

/// Builds the system instruction sent alongside each open-ended question.
///
/// # Example
/// ```rust
/// use uni_assistant_bot::lang::Language;
/// use uni_assistant_bot::llm::PromptBuilder;
///
/// let builder = PromptBuilder::new("Uni Assistant Bot");
/// let system = builder.system_instruction(Language::Thai);
/// assert!(system.ends_with("Please respond in Thai."));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    bot_name: String,
}

impl PromptBuilder {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
        }
    }

    pub fn system_instruction(&self, language: Language) -> String {
        format!(
            "You are {}, a helpful university assistant bot. \
             Provide accurate and concise information about university-related topics. \
             Please respond in {}.",
            self.bot_name,
            language.display_name()
        )
    }
}
