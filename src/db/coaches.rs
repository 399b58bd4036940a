use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePool;

use super::{CoachRepository, RepositoryError};
use crate::models::{Coach, CoachFields};

/// [`CoachRepository`] backed by the `coaches` table in SQLite.
///
/// The unique index on `email` is what actually keeps addresses unique;
/// writes that trip it come back as [`RepositoryError::DuplicateEmail`].
#[derive(Clone)]
pub struct SqliteCoachRepository {
    pool: SqlitePool,
}

impl SqliteCoachRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error, fields: &CoachFields) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::DuplicateEmail {
                email: fields.email.clone().unwrap_or_default(),
            }
        }
        _ => RepositoryError::Database(err),
    }
}

#[async_trait]
impl CoachRepository for SqliteCoachRepository {
    async fn find_all(&self) -> Result<Vec<Coach>, RepositoryError> {
        let coaches = sqlx::query_as::<_, Coach>(r#"SELECT * FROM coaches ORDER BY coach_id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(coaches)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Coach>, RepositoryError> {
        let coach = sqlx::query_as::<_, Coach>(r#"SELECT * FROM coaches WHERE coach_id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(coach)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Coach>, RepositoryError> {
        let coach = sqlx::query_as::<_, Coach>(r#"SELECT * FROM coaches WHERE email = ?"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(coach)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, i64>(
            r#"SELECT EXISTS(SELECT 1 FROM coaches WHERE email = ?)"#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(found != 0)
    }

    async fn find_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Coach>, RepositoryError> {
        let coaches = sqlx::query_as::<_, Coach>(
            r#"SELECT * FROM coaches WHERE specialization = ? ORDER BY coach_id"#,
        )
        .bind(specialization)
        .fetch_all(&self.pool)
        .await?;
        Ok(coaches)
    }

    // SQLite's lower() only folds ASCII, so both sides are folded in Rust.
    // instr() rather than LIKE so '%' and '_' in the fragment match literally.
    async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Coach>, RepositoryError> {
        let coaches = sqlx::query_as::<_, Coach>(
            r#"SELECT * FROM coaches
               WHERE instr(name_search, ?) > 0
               ORDER BY coach_id"#,
        )
        .bind(fragment.to_lowercase())
        .fetch_all(&self.pool)
        .await?;
        Ok(coaches)
    }

    async fn save(&self, id: Option<i64>, fields: &CoachFields) -> Result<Coach, RepositoryError> {
        let now = Utc::now();
        let name_search = fields.name.to_lowercase();
        let mut tx = self.pool.begin().await?;

        let coach = match id {
            None => sqlx::query_as::<_, Coach>(
                r#"INSERT INTO coaches
                       (name, name_search, specialization, phone, email, created_at, updated_at)
                   VALUES (?, ?, ?, ?, ?, ?, ?)
                   RETURNING *"#,
            )
            .bind(&fields.name)
            .bind(&name_search)
            .bind(&fields.specialization)
            .bind(&fields.phone)
            .bind(&fields.email)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, fields))?,
            Some(id) => sqlx::query_as::<_, Coach>(
                r#"UPDATE coaches
                   SET name = ?, name_search = ?, specialization = ?, phone = ?, email = ?,
                       updated_at = ?
                   WHERE coach_id = ?
                   RETURNING *"#,
            )
            .bind(&fields.name)
            .bind(&name_search)
            .bind(&fields.specialization)
            .bind(&fields.phone)
            .bind(&fields.email)
            .bind(now)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, fields))?
            .ok_or(RepositoryError::NotFound { id })?,
        };

        tx.commit().await?;
        Ok(coach)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM coaches WHERE coach_id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, i64>(
            r#"SELECT EXISTS(SELECT 1 FROM coaches WHERE coach_id = ?)"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(found != 0)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM coaches"#)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
