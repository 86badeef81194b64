//! Conversation assembly for the support chat

use crate::llm::ChatMessage;
use crate::llm::SUPPORT_SYSTEM_PROMPT;

/// Assembles the message list sent to the LLM provider
///
/// The shape is fixed: one system directive first, then the prior turns
/// in chronological order, then the new user message last. Nothing is
/// reordered or truncated here; history sizing happens upstream.
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    system_prompt: String,
}

impl ContextAssembler {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }

    /// The directive prepended to every conversation
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Build the full message list for one reply generation
    #[must_use]
    pub fn assemble(&self, history: &[ChatMessage], user_message: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(self.system_prompt.clone()));
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(user_message));
        messages
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(SUPPORT_SYSTEM_PROMPT)
    }
}
