//! PostgreSQL implementation of chirp repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Chirp, NewChirp};
use crate::domain::repositories::ChirpRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ChirpRow {
    id: Uuid,
    body: String,
    user_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ChirpRow> for Chirp {
    fn from(r: ChirpRow) -> Self {
        Chirp {
            id: r.id,
            body: r.body,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for chirp storage.
pub struct PgChirpRepository {
    pool: Arc<PgPool>,
}

impl PgChirpRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChirpRepository for PgChirpRepository {
    async fn create(&self, new_chirp: NewChirp) -> Result<Chirp, AppError> {
        let row = sqlx::query_as::<_, ChirpRow>(
            r#"
            INSERT INTO chirps (id, body, user_id, created_at, updated_at)
            VALUES (gen_random_uuid(), $1, $2, NOW(), NOW())
            RETURNING id, body, user_id, created_at, updated_at
            "#,
        )
        .bind(new_chirp.body.into_inner())
        .bind(new_chirp.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chirps")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
