//! Diary endpoints: CRUD with automatic sentiment scoring

use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;
use uuid::Uuid;

use super::status_for;
use super::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::DeletedResponse;
use crate::api::types::DiaryCreateRequest;
use crate::api::types::DiaryEntryResponse;
use crate::api::types::DiaryListQuery;
use crate::api::types::DiaryUpdateRequest;
use crate::api::types::OwnerQuery;
use crate::models::DiaryEntry;
use crate::models::ScoreSource;

/// Create a diary entry and score its content (POST /api/diary)
pub async fn create_diary_entry(
    State(state): State<AppState>,
    Json(req): Json<DiaryCreateRequest>,
) -> Result<Json<ApiResponse<DiaryEntryResponse>>, StatusCode> {
    info!(
        "POST /api/diary: user {} ({} chars)",
        req.user_id,
        req.content.len()
    );

    // Score before any write so a collaborator failure stores nothing
    let sentiment = match state.analyzer.analyze(&req.content).await {
        Ok(sentiment) => sentiment,
        Err(e) => {
            error!("Failed to score diary entry: {}", e);
            return Err(status_for(&e));
        }
    };

    let entry = match state
        .database
        .insert_diary_entry(req.user_id, &req.title, &req.content)
        .await
    {
        Ok(entry) => entry,
        Err(e) => {
            error!("Failed to store diary entry: {}", e);
            return Err(status_for(&e));
        }
    };

    if let Err(e) = state
        .database
        .insert_emotion_score(req.user_id, sentiment.score, ScoreSource::Diary, entry.id)
        .await
    {
        error!("Failed to store emotion score: {}", e);
        return Err(status_for(&e));
    }

    Ok(Json(ApiResponse::success(DiaryEntryResponse {
        entry,
        sentiment,
    })))
}

/// List diary entries, newest first (GET /api/diary)
pub async fn list_diary_entries(
    State(state): State<AppState>,
    Query(query): Query<DiaryListQuery>,
) -> Result<Json<ApiResponse<Vec<DiaryEntry>>>, StatusCode> {
    info!(
        "GET /api/diary: user {} limit {} offset {}",
        query.user_id, query.limit, query.offset
    );

    match state
        .database
        .list_diary_entries(query.user_id, query.limit, query.offset)
        .await
    {
        Ok(entries) => Ok(Json(ApiResponse::success(entries))),
        Err(e) => {
            error!("Failed to list diary entries: {}", e);
            Err(status_for(&e))
        }
    }
}

/// Fetch a single diary entry (GET /api/diary/:id)
pub async fn get_diary_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<ApiResponse<DiaryEntry>>, StatusCode> {
    info!("GET /api/diary/{}: user {}", id, query.user_id);

    match state.database.get_diary_entry(query.user_id, id).await {
        Ok(Some(entry)) => Ok(Json(ApiResponse::success(entry))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to fetch diary entry {}: {}", id, e);
            Err(status_for(&e))
        }
    }
}

/// Update a diary entry and re-score its content (PUT /api/diary/:id)
pub async fn update_diary_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DiaryUpdateRequest>,
) -> Result<Json<ApiResponse<DiaryEntryResponse>>, StatusCode> {
    info!("PUT /api/diary/{}: user {}", id, req.user_id);

    let entry = match state
        .database
        .update_diary_entry(req.user_id, id, req.title.as_deref(), req.content.as_deref())
        .await
    {
        Ok(entry) => entry,
        Err(e) => {
            error!("Failed to update diary entry {}: {}", id, e);
            return Err(status_for(&e));
        }
    };

    // Re-score the stored content so trend data tracks the edit
    let sentiment = match state.analyzer.analyze(&entry.content).await {
        Ok(sentiment) => sentiment,
        Err(e) => {
            error!("Failed to re-score diary entry {}: {}", id, e);
            return Err(status_for(&e));
        }
    };

    if let Err(e) = state
        .database
        .update_emotion_score_for(ScoreSource::Diary, entry.id, sentiment.score)
        .await
    {
        error!("Failed to update emotion score for {}: {}", id, e);
        return Err(status_for(&e));
    }

    Ok(Json(ApiResponse::success(DiaryEntryResponse {
        entry,
        sentiment,
    })))
}

/// Delete a diary entry and its score events (DELETE /api/diary/:id)
pub async fn delete_diary_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, StatusCode> {
    info!("DELETE /api/diary/{}: user {}", id, query.user_id);

    // Scores first: a failure between the two deletes leaves the entry in
    // place for a retry instead of orphaned score rows feeding the trend
    if let Err(e) = state
        .database
        .delete_emotion_scores_for(query.user_id, ScoreSource::Diary, id)
        .await
    {
        error!("Failed to delete emotion scores for {}: {}", id, e);
        return Err(status_for(&e));
    }

    match state.database.delete_diary_entry(query.user_id, id).await {
        Ok(true) => Ok(Json(ApiResponse::success(DeletedResponse {
            deleted_id: id,
        }))),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to delete diary entry {}: {}", id, e);
            Err(status_for(&e))
        }
    }
}
