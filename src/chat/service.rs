//! Reply generation service for the support chat

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::chat::ContextAssembler;
use crate::config::AppConfig;
use crate::database::Database;
use crate::errors::Result;
use crate::errors::SolaceError;
use crate::llm::system_directive;
use crate::llm::ChatMessage;
use crate::llm::ReplyGenerator;
use crate::models::ChatExchange;

/// Generates supportive replies from conversation history
pub struct ChatService {
    database: Arc<Database>,
    llm: Arc<dyn ReplyGenerator>,
    assembler: ContextAssembler,
    history_limit: i64,
}

impl ChatService {
    /// Create from existing services, taking the directive and history
    /// window from configuration
    #[must_use]
    pub fn from_config(
        config: &AppConfig,
        database: Arc<Database>,
        llm: Arc<dyn ReplyGenerator>,
    ) -> Self {
        let assembler = ContextAssembler::new(system_directive(config));
        let history_limit = i64::from(config.history_limit());

        Self {
            database,
            llm,
            assembler,
            history_limit,
        }
    }

    #[must_use]
    pub fn new(
        database: Arc<Database>,
        llm: Arc<dyn ReplyGenerator>,
        assembler: ContextAssembler,
        history_limit: i64,
    ) -> Self {
        Self {
            database,
            llm,
            assembler,
            history_limit,
        }
    }

    /// Generate a reply to one user message
    ///
    /// # Errors
    /// - Empty or whitespace-only message
    /// - Database errors while loading recent history
    /// - LLM provider errors (API failures, malformed responses)
    pub async fn respond(&self, user_id: i64, message: &str) -> Result<String> {
        if message.trim().is_empty() {
            return Err(SolaceError::EmptyMessage);
        }

        info!("Generating support reply for user {}", user_id);

        // Step 1: Load the most recent exchanges
        debug!("Step 1: Loading up to {} recent exchanges", self.history_limit);
        let recent = self
            .database
            .recent_chat_exchanges(user_id, self.history_limit)
            .await?;

        // Step 2: Flatten to chronological turns and assemble
        let history = flatten_history(&recent);
        debug!("Step 2: Assembling context ({} prior turns)", history.len());
        let messages = self.assembler.assemble(&history, message);

        // Step 3: Generate the reply
        debug!("Step 3: Generating reply");
        let reply = self.llm.generate_reply(&messages).await?;

        info!("Reply generated ({} chars)", reply.len());
        Ok(reply)
    }
}

/// Turn newest-first stored exchanges into chronological user/assistant turns
fn flatten_history(exchanges: &[ChatExchange]) -> Vec<ChatMessage> {
    let mut turns = Vec::with_capacity(exchanges.len() * 2);
    for exchange in exchanges.iter().rev() {
        turns.push(ChatMessage::user(exchange.message.clone()));
        turns.push(ChatMessage::assistant(exchange.reply.clone()));
    }
    turns
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::flatten_history;
    use crate::llm::ChatRole;
    use crate::models::ChatExchange;

    fn exchange(message: &str, reply: &str) -> ChatExchange {
        ChatExchange {
            id: Uuid::new_v4(),
            user_id: 1,
            message: message.to_string(),
            reply: reply.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_flatten_reverses_to_chronological() {
        // Stored order is newest first
        let stored = vec![exchange("second", "reply two"), exchange("first", "reply one")];

        let turns = flatten_history(&stored);

        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].content, "first");
        assert_eq!(turns[1].content, "reply one");
        assert_eq!(turns[2].content, "second");
        assert_eq!(turns[3].content, "reply two");
    }

    #[test]
    fn test_flatten_alternates_roles() {
        let stored = vec![exchange("b", "rb"), exchange("a", "ra")];

        let turns = flatten_history(&stored);

        assert_eq!(turns[0].role, ChatRole::User);
        assert_eq!(turns[1].role, ChatRole::Assistant);
        assert_eq!(turns[2].role, ChatRole::User);
        assert_eq!(turns[3].role, ChatRole::Assistant);
    }

    #[test]
    fn test_flatten_empty_history() {
        assert!(flatten_history(&[]).is_empty());
    }
}
