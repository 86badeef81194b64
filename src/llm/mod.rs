//! Reply generation module
//!
//! Turns an assembled conversation context into a reply using one of the
//! supported providers:
//! - OpenAI-compatible chat completions
//! - Gemini (`generateContent`, with role remapping)
//! - Ollama (local models)
//!
//! The chat pipeline depends on the [`ReplyGenerator`] trait only; the
//! concrete [`LlmClient`] is chosen from configuration.

pub mod client;
pub mod prompts;

pub use client::LlmClient;
pub use client::LlmProvider;
pub use prompts::system_directive;
pub use prompts::SUPPORT_SYSTEM_PROMPT;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;

/// Role of a conversation turn.
///
/// Roles stay generic here; providers that only understand two roles remap
/// inside their own adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single role-tagged conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Generates a reply from an ordered, role-tagged conversation context.
///
/// Failures propagate to the caller; no retry or fallback reply lives at
/// this boundary.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate_reply(&self, messages: &[ChatMessage]) -> Result<String>;
}
