//! Per-conversation chat history for the terminal front-end.
//!
//! [`ChatSession`] keeps the most recent turns in a bounded window; the
//! oldest turn is dropped once `max_turns` is exceeded.  The assistant
//! itself is stateless, so history only matters for display.

use std::collections::VecDeque;
use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "You"),
            Role::Assistant => write!(f, "Bot"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Rolling window of chat turns.
///
/// # Example
/// ```rust
/// use uni_assistant_bot::session::{ChatSession, Role};
///
/// let mut session = ChatSession::new(2);
/// session.push(Role::User, "hi");
/// session.push(Role::Assistant, "Hello! How can I help you today?");
/// session.push(Role::User, "sports?");
/// assert_eq!(session.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ChatSession {
    turns: VecDeque<ChatTurn>,
    max_turns: usize,
}

impl ChatSession {
    /// `max_turns` of zero keeps no history.
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(max_turns.min(64)),
            max_turns,
        }
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        if self.max_turns == 0 {
            return;
        }
        self.turns.push_back(ChatTurn {
            role,
            content: content.into(),
        });
        while self.turns.len() > self.max_turns {
            self.turns.pop_front();
        }
    }

    /// Record a user message and the bot's answer.
    pub fn record_exchange(&mut self, user: &str, answer: &str) {
        self.push(Role::User, user);
        self.push(Role::Assistant, answer);
    }

    /// Turns from oldest to newest.
    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let s = ChatSession::new(10);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn evicts_oldest_beyond_limit() {
        let mut s = ChatSession::new(3);
        for i in 0..5 {
            s.push(Role::User, format!("message {i}"));
        }
        let contents: Vec<&str> = s.turns().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn record_exchange_keeps_order() {
        let mut s = ChatSession::new(10);
        s.record_exchange("เทอม", "เทอม 1/1 เริ่มเดือนมิถุนายน");
        let roles: Vec<Role> = s.turns().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut s = ChatSession::new(0);
        s.record_exchange("hi", "Hello!");
        assert!(s.is_empty());
    }

    #[test]
    fn clear_empties_history() {
        let mut s = ChatSession::new(4);
        s.record_exchange("hi", "Hello!");
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::User.to_string(), "You");
        assert_eq!(Role::Assistant.to_string(), "Bot");
    }
}
