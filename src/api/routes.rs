//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Chat endpoints
        .route("/chat", post(handlers::chat))
        .route("/chat/history", get(handlers::chat_history))
        // Diary endpoints
        .route(
            "/diary",
            post(handlers::create_diary_entry).get(handlers::list_diary_entries),
        )
        .route(
            "/diary/:id",
            get(handlers::get_diary_entry)
                .put(handlers::update_diary_entry)
                .delete(handlers::delete_diary_entry),
        )
        // Emotion endpoints
        .route("/emotions/trend", get(handlers::emotion_trend))
        .route("/emotions/analyze", get(handlers::analyze_text))
        // Support resources
        .route("/resources", get(handlers::support_resources))
        .with_state(state)
}
