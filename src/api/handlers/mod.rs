//! API request handlers

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::chat::ChatService;
use crate::database::Database;
use crate::sentiment::SentimentAnalyzer;
use crate::SolaceError;

pub mod chat;
pub mod diary;
pub mod emotions;
pub mod resources;

pub use chat::*;
pub use diary::*;
pub use emotions::*;
pub use resources::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<Database>,
    pub analyzer: Arc<SentimentAnalyzer>,
    pub chat_service: Arc<ChatService>,
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Map an error to the status reported to clients
///
/// Rejected input is the caller's fault, collaborator failures (LLM
/// provider, polarity service) are bad gateways, missing rows are 404,
/// everything else is internal.
pub(crate) fn status_for(error: &SolaceError) -> StatusCode {
    match error {
        SolaceError::EmptyMessage => StatusCode::BAD_REQUEST,
        SolaceError::DiaryEntryNotFound(_) => StatusCode::NOT_FOUND,
        SolaceError::LlmError(_) | SolaceError::HttpError(_) | SolaceError::AnalysisError(_) => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::status_for;
    use crate::SolaceError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&SolaceError::EmptyMessage),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&SolaceError::DiaryEntryNotFound(uuid::Uuid::nil())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&SolaceError::LlmError("provider down".to_string())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&SolaceError::AnalysisError("timeout".to_string())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&SolaceError::Custom("anything else".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
