//! Chat endpoints: reply generation and history

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::status_for;
use super::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::ChatReplyResponse;
use crate::api::types::ChatRequest;
use crate::api::types::HistoryQuery;
use crate::models::ChatExchange;
use crate::models::ScoreSource;

/// Generate a supportive reply (POST /api/chat)
///
/// The exchange is persisted and the user message scored; the stored
/// score feeds the trend endpoint. Message content is never logged.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatReplyResponse>>, StatusCode> {
    info!(
        "POST /api/chat: user {} ({} chars)",
        req.user_id,
        req.message.len()
    );

    let reply = match state.chat_service.respond(req.user_id, &req.message).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Reply generation failed: {}", e);
            return Err(status_for(&e));
        }
    };

    // Score before persisting so a scoring failure leaves no partial state
    let sentiment = match state.analyzer.analyze(&req.message).await {
        Ok(sentiment) => sentiment,
        Err(e) => {
            error!("Failed to score chat message: {}", e);
            return Err(status_for(&e));
        }
    };

    let exchange = match state
        .database
        .insert_chat_exchange(req.user_id, &req.message, &reply)
        .await
    {
        Ok(exchange) => exchange,
        Err(e) => {
            error!("Failed to store chat exchange: {}", e);
            return Err(status_for(&e));
        }
    };

    if let Err(e) = state
        .database
        .insert_emotion_score(req.user_id, sentiment.score, ScoreSource::Chat, exchange.id)
        .await
    {
        error!("Failed to store emotion score: {}", e);
        return Err(status_for(&e));
    }

    Ok(Json(ApiResponse::success(ChatReplyResponse {
        reply: exchange.reply,
        sentiment,
        chat_id: exchange.id,
    })))
}

/// List past exchanges, newest first (GET /api/chat/history)
pub async fn chat_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ApiResponse<Vec<ChatExchange>>>, StatusCode> {
    info!(
        "GET /api/chat/history: user {} limit {} offset {}",
        query.user_id, query.limit, query.offset
    );

    match state
        .database
        .list_chat_exchanges(query.user_id, query.limit, query.offset)
        .await
    {
        Ok(exchanges) => Ok(Json(ApiResponse::success(exchanges))),
        Err(e) => {
            error!("Failed to load chat history: {}", e);
            Err(status_for(&e))
        }
    }
}
