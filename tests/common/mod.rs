#![allow(dead_code)]

use std::sync::Arc;

use coach_service::db::{self, SqliteCoachRepository};
use coach_service::models::CoachDto;
use coach_service::service::CoachService;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// In-memory database with the coaches schema applied.
///
/// One connection only: every new connection to `sqlite::memory:` would see
/// its own empty database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::migrate(&pool).await.unwrap();
    pool
}

pub async fn create_test_repository() -> SqliteCoachRepository {
    SqliteCoachRepository::new(create_test_pool().await)
}

pub async fn create_test_service() -> CoachService {
    CoachService::new(Arc::new(create_test_repository().await))
}

pub fn coach_request(name: &str, email: Option<&str>) -> CoachDto {
    CoachDto::new(name, Some("Batting"), Some("+94771234567"), email)
}
