mod common;

use chirpy::domain::entities::{ChirpBody, NewChirp};
use chirpy::domain::repositories::ChirpRepository;
use chirpy::error::AppError;
use chirpy::infrastructure::persistence::PgChirpRepository;
use chirpy::utils::profanity_filter::{BannedWords, sanitize};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn cleaned(raw: &str, user_id: Option<Uuid>) -> NewChirp {
    let body = ChirpBody::parse(raw).unwrap();
    NewChirp {
        body: sanitize(&body, BannedWords::global()),
        user_id,
    }
}

#[sqlx::test]
async fn test_create_chirp_with_user(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "author@example.com").await;
    let repo = PgChirpRepository::new(Arc::new(pool));

    let chirp = repo
        .create(cleaned("what a kerfuffle", Some(user_id)))
        .await
        .unwrap();

    assert_eq!(chirp.body, "what a ****");
    assert_eq!(chirp.user_id, Some(user_id));
    assert!(!chirp.id.is_nil());
}

#[sqlx::test]
async fn test_create_chirp_without_user(pool: PgPool) {
    let repo = PgChirpRepository::new(Arc::new(pool));

    let chirp = repo.create(cleaned("anonymous chirp", None)).await.unwrap();

    assert_eq!(chirp.body, "anonymous chirp");
    assert!(chirp.user_id.is_none());
}

#[sqlx::test]
async fn test_create_chirp_unknown_user(pool: PgPool) {
    let repo = PgChirpRepository::new(Arc::new(pool));

    let result = repo.create(cleaned("hello", Some(Uuid::new_v4()))).await;

    assert!(matches!(result.unwrap_err(), AppError::BadShape { .. }));
}

#[sqlx::test]
async fn test_count_chirps(pool: PgPool) {
    let repo = PgChirpRepository::new(Arc::new(pool));

    repo.create(cleaned("one", None)).await.unwrap();
    repo.create(cleaned("two", None)).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}
