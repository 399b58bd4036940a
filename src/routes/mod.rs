use axum::{
    Router,
    http::{HeaderValue, Method, header::InvalidHeaderValue},
    routing::get,
};
use tower_http::cors::{AllowHeaders, CorsLayer};

use crate::service::CoachService;

pub mod coaches;
pub mod health;

/// All coach endpoints, without CORS or tracing layers.
pub fn create_router(service: CoachService) -> Router {
    Router::new()
        .route("/", get(|| async { "Coach Management Service - v1.0" }))

        // Coach endpoints
        .route(
            "/api/coaches",
            get(coaches::get_coaches).post(coaches::create_coach),
        )
        .route("/api/coaches/health", get(health::health_check))
        .route("/api/coaches/count", get(coaches::get_coach_count))
        .route("/api/coaches/search", get(coaches::search_coaches))
        .route(
            "/api/coaches/specialization/{specialization}",
            get(coaches::get_coaches_by_specialization),
        )
        .route(
            "/api/coaches/{id}",
            get(coaches::get_coach_by_id)
                .put(coaches::update_coach)
                .delete(coaches::delete_coach),
        )

        .with_state(service)
}

// CORS configuration for the frontend. Credentials rule out a wildcard for
// headers, so requested headers are echoed back instead.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
