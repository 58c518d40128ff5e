#![allow(dead_code)]

use axum_test::TestServer;
use chirpy::infrastructure::persistence::{PgChirpRepository, PgUserRepository};
use chirpy::routes::app_router;
use chirpy::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_test_user(pool: &PgPool, email: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (id, email) VALUES (gen_random_uuid(), $1) RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_chirp(pool: &PgPool, body: &str, user_id: Uuid) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO chirps (id, body, user_id) VALUES (gen_random_uuid(), $1, $2) RETURNING id",
    )
    .bind(body)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let chirp_repo = Arc::new(PgChirpRepository::new(pool));

    AppState::new(user_repo, chirp_repo)
}

pub fn create_test_server(pool: PgPool) -> (TestServer, AppState) {
    let state = create_test_state(pool);
    let app = app_router(state.clone(), "static");

    (TestServer::new(app).unwrap(), state)
}
