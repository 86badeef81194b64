//! Support resources endpoint

use axum::Json;
use tracing::info;

use crate::api::types::ApiResponse;
use crate::resources::SupportResources;

/// Static self-care tips and crisis lines (GET /api/resources)
pub async fn support_resources() -> Json<ApiResponse<SupportResources>> {
    info!("GET /api/resources");
    Json(ApiResponse::success(SupportResources::bundled()))
}
