//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::chat::ChatService;
use crate::config::AppConfig;
use crate::database::Database;
use crate::llm::LlmClient;
use crate::sentiment::HttpPolarityClient;
use crate::sentiment::SentimentAnalyzer;
use crate::Result;

/// Start the API server
pub async fn serve_api(
    config: &AppConfig,
    host: String,
    port: u16,
    enable_cors: bool,
) -> Result<()> {
    info!("🚀 Starting Solace API server...");

    // Initialize services
    let database = Arc::new(Database::from_config(config).await?);
    database.verify_schema_or_error().await?;

    let polarity = Arc::new(HttpPolarityClient::new(config)?);
    let analyzer = Arc::new(SentimentAnalyzer::new(config, polarity)?);
    let llm = Arc::new(LlmClient::new(config)?);
    let chat_service = Arc::new(ChatService::from_config(config, database.clone(), llm));

    info!("🧠 LLM provider: {}", config.llm_provider());

    let state = AppState {
        database,
        analyzer,
        chat_service,
    };

    // Build API routes
    let api_router = routes::api_routes(state);
    let mut app = Router::new().nest("/api", api_router);

    // Add middleware layers
    app = app
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Add CORS if enabled
    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("📋 RESTful API available at http://{}/api", addr);
    info!("");
    info!("Available endpoints:");
    info!("  GET    /api/health           - Health check");
    info!("  POST   /api/chat             - Send a message, get a supportive reply");
    info!("  GET    /api/chat/history     - List past exchanges");
    info!("  POST   /api/diary            - Create a diary entry");
    info!("  GET    /api/diary            - List diary entries");
    info!("  GET    /api/diary/:id        - Fetch a diary entry");
    info!("  PUT    /api/diary/:id        - Update a diary entry");
    info!("  DELETE /api/diary/:id        - Delete a diary entry");
    info!("  GET    /api/emotions/trend   - Emotional trend summary");
    info!("  GET    /api/emotions/analyze - Score arbitrary text");
    info!("  GET    /api/resources        - Self-care and crisis resources");

    axum::serve(listener, app).await?;

    Ok(())
}
