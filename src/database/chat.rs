use super::Database;
use crate::models::ChatExchange;
use crate::Result;

impl Database {
    /// Store one chat exchange (user message plus assistant reply)
    pub async fn insert_chat_exchange(
        &self,
        user_id: i64,
        message: &str,
        reply: &str,
    ) -> Result<ChatExchange> {
        let exchange = sqlx::query_as(
            r"
            INSERT INTO chat_messages (user_id, message, reply)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(user_id)
        .bind(message)
        .bind(reply)
        .fetch_one(&self.pool)
        .await?;

        Ok(exchange)
    }

    /// Most recent exchanges for a user, newest first
    pub async fn recent_chat_exchanges(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<ChatExchange>> {
        let exchanges = sqlx::query_as(
            r"
            SELECT * FROM chat_messages
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(exchanges)
    }

    /// List chat exchanges for a user, newest first, with paging
    pub async fn list_chat_exchanges(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ChatExchange>> {
        let exchanges = sqlx::query_as(
            r"
            SELECT * FROM chat_messages
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(exchanges)
    }
}
