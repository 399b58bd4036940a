use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::models::FieldViolation;
use crate::service::CoachError;

#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldViolation>),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    InternalError,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldViolation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                details,
            ),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, Vec::new()),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message, Vec::new()),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message, Vec::new()),
            ApiError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Vec::new(),
            ),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

impl From<CoachError> for ApiError {
    fn from(err: CoachError) -> Self {
        match err {
            CoachError::Validation(details) => ApiError::Validation(details),
            CoachError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            CoachError::Conflict { .. } => ApiError::Conflict(err.to_string()),
            CoachError::Repository(source) => {
                tracing::error!(error = %source, "Coach storage failure");
                ApiError::InternalError
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
