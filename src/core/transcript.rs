//! Ordered, append-only conversation history.

use crate::core::messages::{ChatMessage, Role};

pub const DEFAULT_GREETING: &str = "How can I help you?";

/// The conversation so far, oldest turn first.
///
/// A transcript always starts with the assistant greeting it was seeded with,
/// so it is never empty.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn seeded(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Removes the last message if it is a user turn that never got a reply.
    ///
    /// Returns the removed message. The seed is never removed.
    pub fn discard_dangling_user_turn(&mut self) -> Option<ChatMessage> {
        match self.messages.last() {
            Some(last) if last.role == Role::User && self.messages.len() > 1 => {
                self.messages.pop()
            }
            _ => None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::seeded(DEFAULT_GREETING)
    }
}
