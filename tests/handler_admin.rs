mod common;

use sqlx::PgPool;

#[sqlx::test]
async fn test_metrics_counts_app_visits(pool: PgPool) {
    let (server, _) = common::create_test_server(pool);

    for _ in 0..3 {
        server.get("/app/").await.assert_status_ok();
    }

    let response = server.get("/admin/metrics").await;

    response.assert_status_ok();
    assert!(response.text().contains("<h1>Welcome, Chirpy Admin</h1>"));
    assert!(response.text().contains("Chirpy has been visited 3 times!"));
}

#[sqlx::test]
async fn test_reset_wipes_users_and_counter(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "gone@example.com").await;
    common::create_test_chirp(&pool, "bye", user_id).await;
    let (server, state) = common::create_test_server(pool.clone());

    server.get("/app/").await.assert_status_ok();
    assert_eq!(state.visits.read(), 1);

    let response = server.post("/admin/reset").await;

    response.assert_status_ok();
    assert!(response.text().contains("Reset Ok!"));
    assert_eq!(state.visits.read(), 0);
    assert_eq!(common::count_rows(&pool, "users").await, 0);
    assert_eq!(common::count_rows(&pool, "chirps").await, 0);

    let metrics = server.get("/admin/metrics").await;
    assert!(metrics.text().contains("Chirpy has been visited 0 times!"));
}

#[sqlx::test]
async fn test_reset_store_failure_keeps_counter(pool: PgPool) {
    let (server, state) = common::create_test_server(pool.clone());

    server.get("/app/").await.assert_status_ok();
    pool.close().await;

    let response = server.post("/admin/reset").await;

    assert!(response.status_code().is_server_error());
    assert_eq!(state.visits.read(), 1);
}
