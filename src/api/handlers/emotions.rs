//! Emotion endpoints: trend aggregation and ad-hoc analysis

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::status_for;
use super::AppState;
use crate::api::types::AnalyzeQuery;
use crate::api::types::ApiResponse;
use crate::api::types::TrendQuery;
use crate::api::types::TrendResponse;
use crate::sentiment::chronological_scores;
use crate::sentiment::summarize_scores;
use crate::sentiment::window_limit;
use crate::sentiment::SentimentResult;

/// Summarize a user's recent emotional trend (GET /api/emotions/trend)
pub async fn emotion_trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<ApiResponse<TrendResponse>>, StatusCode> {
    info!(
        "GET /api/emotions/trend: user {} days {}",
        query.user_id, query.days
    );

    let limit = window_limit(query.days);
    let scores = match state
        .database
        .recent_emotion_scores(query.user_id, limit)
        .await
    {
        Ok(scores) => scores,
        Err(e) => {
            error!("Failed to load emotion scores: {}", e);
            return Err(status_for(&e));
        }
    };

    let summary = summarize_scores(&chronological_scores(&scores));

    Ok(Json(ApiResponse::success(TrendResponse {
        summary,
        scores,
    })))
}

/// Score arbitrary text without persisting anything (GET /api/emotions/analyze)
pub async fn analyze_text(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<ApiResponse<SentimentResult>>, StatusCode> {
    info!("GET /api/emotions/analyze: {} chars", query.text.len());

    match state.analyzer.analyze(&query.text).await {
        Ok(sentiment) => Ok(Json(ApiResponse::success(sentiment))),
        Err(e) => {
            error!("Failed to analyze text: {}", e);
            Err(status_for(&e))
        }
    }
}
