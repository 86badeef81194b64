//! API request and response types

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::models::DiaryEntry;
use crate::models::EmotionScore;
use crate::sentiment::SentimentResult;
use crate::sentiment::TrendSummary;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Chat message request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: i64,
    pub message: String,
}

/// Chat reply with the scored user message
#[derive(Debug, Serialize)]
pub struct ChatReplyResponse {
    pub reply: String,
    pub sentiment: SentimentResult,
    pub chat_id: Uuid,
}

/// Chat history query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Diary entry creation request
#[derive(Debug, Deserialize)]
pub struct DiaryCreateRequest {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

/// Diary entry update request; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct DiaryUpdateRequest {
    pub user_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Diary listing query parameters
#[derive(Debug, Deserialize)]
pub struct DiaryListQuery {
    pub user_id: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Owner scoping for single-entry diary routes
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: i64,
}

/// Diary entry together with its sentiment
#[derive(Debug, Serialize)]
pub struct DiaryEntryResponse {
    pub entry: DiaryEntry,
    pub sentiment: SentimentResult,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted_id: Uuid,
}

/// Trend query parameters
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub user_id: i64,
    #[serde(default = "default_days")]
    pub days: i64,
}

/// Trend summary plus the windowed score events, newest first
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub summary: TrendSummary,
    pub scores: Vec<EmotionScore>,
}

/// Ad-hoc analysis query parameters
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub text: String,
}

fn default_limit() -> i64 {
    20
}

fn default_days() -> i64 {
    30
}
