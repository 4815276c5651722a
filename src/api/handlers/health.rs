//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::{
    models::HealthResponse,
    services::AppState,
};

// =====================================
// Health Check
// =====================================
/// بررسی سلامت سرویس و اتصال دیتابیس
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// - `200` با `"status": "healthy"`
/// - `503` با `"status": "degraded"` اگه دیتابیس جواب نده
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let db_ok = match state.database.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    let status = if db_ok { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status, Json(HealthResponse::from_database(db_ok)))
}
