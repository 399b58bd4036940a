use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coach row as stored in the `coaches` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Coach {
    pub coach_id: i64,
    pub name: String,
    pub specialization: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire representation of a coach, used for request and response bodies.
///
/// On the way in, `coachId`, `createdAt` and `updatedAt` are ignored; the
/// server owns them. On the way out every field is filled from the stored row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachDto {
    pub coach_id: Option<i64>,
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CoachDto {
    /// Request body with just the caller-editable fields set
    pub fn new(
        name: impl Into<String>,
        specialization: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            specialization: specialization.map(str::to_string),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
            ..Self::default()
        }
    }
}

impl From<Coach> for CoachDto {
    fn from(coach: Coach) -> Self {
        Self {
            coach_id: Some(coach.coach_id),
            name: Some(coach.name),
            specialization: coach.specialization,
            phone: coach.phone,
            email: coach.email,
            created_at: Some(coach.created_at),
            updated_at: Some(coach.updated_at),
        }
    }
}

/// The mutable fields of a coach after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachFields {
    pub name: String,
    pub specialization: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Response body for DELETE /api/coaches/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}

/// Response body for GET /api/coaches/count
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    pub total_coaches: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
