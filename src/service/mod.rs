use std::sync::Arc;

use crate::db::{CoachRepository, RepositoryError};
use crate::models::{CoachDto, FieldViolation};

pub mod validation;

use validation::validate_coach;

#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    #[error("invalid coach data")]
    Validation(Vec<FieldViolation>),
    #[error("Coach not found with id: {id}")]
    NotFound { id: i64 },
    #[error("Email already exists: {email}")]
    Conflict { email: String },
    #[error(transparent)]
    Repository(RepositoryError),
}

// The unique index can still fire after the pre-check passed (concurrent
// writers), so a duplicate from storage is the same conflict to the caller.
impl From<RepositoryError> for CoachError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateEmail { email } => CoachError::Conflict { email },
            RepositoryError::NotFound { id } => CoachError::NotFound { id },
            other => CoachError::Repository(other),
        }
    }
}

/// Business operations on coaches.
///
/// Cheap to clone; all clones share the same repository.
#[derive(Clone)]
pub struct CoachService {
    repository: Arc<dyn CoachRepository>,
}

impl CoachService {
    pub fn new(repository: Arc<dyn CoachRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_coaches(&self) -> Result<Vec<CoachDto>, CoachError> {
        tracing::info!("Fetching all coaches");
        let coaches = self.repository.find_all().await?;
        Ok(coaches.into_iter().map(CoachDto::from).collect())
    }

    pub async fn get_coach(&self, id: i64) -> Result<CoachDto, CoachError> {
        tracing::info!(id, "Fetching coach");
        let coach = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CoachError::NotFound { id })?;
        Ok(coach.into())
    }

    /// Create a coach from `dto`. Any id or timestamps in `dto` are ignored.
    pub async fn create_coach(&self, dto: &CoachDto) -> Result<CoachDto, CoachError> {
        let fields = validate_coach(dto).map_err(CoachError::Validation)?;
        tracing::info!(name = %fields.name, "Creating new coach");

        if let Some(email) = &fields.email {
            if self.repository.exists_by_email(email).await? {
                tracing::warn!(%email, "Rejecting coach with duplicate email");
                return Err(CoachError::Conflict {
                    email: email.clone(),
                });
            }
        }

        let saved = self.repository.save(None, &fields).await?;
        tracing::info!(id = saved.coach_id, "Coach created");
        Ok(saved.into())
    }

    /// Overwrite the editable fields of coach `id`.
    ///
    /// Keeping the coach's current email is never a conflict; switching to an
    /// address another coach holds is.
    pub async fn update_coach(&self, id: i64, dto: &CoachDto) -> Result<CoachDto, CoachError> {
        let fields = validate_coach(dto).map_err(CoachError::Validation)?;
        tracing::info!(id, "Updating coach");

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CoachError::NotFound { id })?;

        if let Some(email) = &fields.email {
            let changed = existing.email.as_deref() != Some(email.as_str());
            if changed && self.repository.exists_by_email(email).await? {
                tracing::warn!(id, %email, "Rejecting update to an email already in use");
                return Err(CoachError::Conflict {
                    email: email.clone(),
                });
            }
        }

        let updated = self.repository.save(Some(id), &fields).await?;
        tracing::info!(id, "Coach updated");
        Ok(updated.into())
    }

    pub async fn delete_coach(&self, id: i64) -> Result<(), CoachError> {
        tracing::info!(id, "Deleting coach");

        if !self.repository.exists_by_id(id).await? {
            return Err(CoachError::NotFound { id });
        }
        // Someone else may have removed it since the check
        if !self.repository.delete_by_id(id).await? {
            return Err(CoachError::NotFound { id });
        }

        tracing::info!(id, "Coach deleted");
        Ok(())
    }

    pub async fn search_coaches_by_name(&self, name: &str) -> Result<Vec<CoachDto>, CoachError> {
        tracing::info!(name, "Searching coaches by name");
        let coaches = self.repository.find_by_name_containing(name).await?;
        Ok(coaches.into_iter().map(CoachDto::from).collect())
    }

    pub async fn coaches_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<CoachDto>, CoachError> {
        tracing::info!(specialization, "Fetching coaches by specialization");
        let coaches = self
            .repository
            .find_by_specialization(specialization)
            .await?;
        Ok(coaches.into_iter().map(CoachDto::from).collect())
    }

    pub async fn count_coaches(&self) -> Result<i64, CoachError> {
        tracing::info!("Fetching total coach count");
        Ok(self.repository.count().await?)
    }
}
