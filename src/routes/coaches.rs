use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{CoachDto, CountResponse, DeleteResponse};
use crate::service::CoachService;

// Query parameters for searching coaches
#[derive(Deserialize)]
pub struct SearchQuery {
    name: String,
}

// GET /api/coaches - List all coaches
pub async fn get_coaches(
    State(service): State<CoachService>,
) -> Result<Json<Vec<CoachDto>>, ApiError> {
    let coaches = service.list_coaches().await?;
    Ok(Json(coaches))
}

// GET /api/coaches/{id} - Get coach by ID
pub async fn get_coach_by_id(
    State(service): State<CoachService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CoachDto>, ApiError> {
    let Path(id) = id?;
    let coach = service.get_coach(id).await?;
    Ok(Json(coach))
}

// POST /api/coaches - Create a coach
pub async fn create_coach(
    State(service): State<CoachService>,
    payload: Result<Json<CoachDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CoachDto>), ApiError> {
    let Json(dto) = payload?;
    let created = service.create_coach(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/coaches/{id} - Replace a coach's editable fields
pub async fn update_coach(
    State(service): State<CoachService>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CoachDto>, JsonRejection>,
) -> Result<Json<CoachDto>, ApiError> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    let updated = service.update_coach(id, &dto).await?;
    Ok(Json(updated))
}

// DELETE /api/coaches/{id} - Delete a coach
pub async fn delete_coach(
    State(service): State<CoachService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id?;
    service.delete_coach(id).await?;

    Ok(Json(DeleteResponse {
        message: "Coach deleted successfully".to_string(),
        id: id.to_string(),
    }))
}

// GET /api/coaches/search?name=smith - Case-insensitive name search
pub async fn search_coaches(
    State(service): State<CoachService>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<CoachDto>>, ApiError> {
    let Query(params) = params?;
    let coaches = service.search_coaches_by_name(&params.name).await?;
    Ok(Json(coaches))
}

// GET /api/coaches/specialization/{specialization} - Exact specialization filter
pub async fn get_coaches_by_specialization(
    State(service): State<CoachService>,
    Path(specialization): Path<String>,
) -> Result<Json<Vec<CoachDto>>, ApiError> {
    let coaches = service.coaches_by_specialization(&specialization).await?;
    Ok(Json(coaches))
}

// GET /api/coaches/count - Total number of coaches
pub async fn get_coach_count(
    State(service): State<CoachService>,
) -> Result<Json<CountResponse>, ApiError> {
    let total_coaches = service.count_coaches().await?;
    Ok(Json(CountResponse { total_coaches }))
}
