use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::models::{Coach, CoachFields};

mod coaches;

pub use coaches::SqliteCoachRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("email already in use: {email}")]
    DuplicateEmail { email: String },
    #[error("coach {id} does not exist")]
    NotFound { id: i64 },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage operations the coach service relies on.
///
/// `save` inserts when `id` is `None` and updates the row otherwise. Both
/// paths stamp the timestamps themselves, so callers never supply them.
/// Implementations must reject a second row with the same non-null email
/// with [`RepositoryError::DuplicateEmail`], even when `exists_by_email`
/// said the address was free.
#[async_trait]
pub trait CoachRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Coach>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Coach>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Coach>, RepositoryError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Exact match on specialization
    async fn find_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Coach>, RepositoryError>;

    /// Case-insensitive substring match on name
    async fn find_by_name_containing(&self, fragment: &str)
    -> Result<Vec<Coach>, RepositoryError>;

    async fn save(&self, id: Option<i64>, fields: &CoachFields) -> Result<Coach, RepositoryError>;

    /// Returns `false` when no row had that id.
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn count(&self) -> Result<i64, RepositoryError>;
}

// Pool setup
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Apply the embedded migrations in `migrations/`
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
