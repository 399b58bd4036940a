use axum::{http::StatusCode, response::Json};

use crate::models::HealthResponse;

pub const SERVICE_NAME: &str = "Coach Management Service";

// GET /api/coaches/health - Liveness check, never touches the database
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "UP".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
