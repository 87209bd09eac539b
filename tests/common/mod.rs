#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use gym_membership::api::handlers::health_handler;
use gym_membership::api::routes::resource_routes;
use gym_membership::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_plan(pool: &PgPool, name: &str, price: f64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO plans (plan_name, price) VALUES ($1, $2) RETURNING plan_id",
    )
    .bind(name)
    .bind(price)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_member(pool: &PgPool, name: &str, email: &str, plan_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO members (name, age, email, plan_id) VALUES ($1, 30, $2, $3) RETURNING member_id",
    )
    .bind(name)
    .bind(email)
    .bind(plan_id)
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
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    let app: Router = resource_routes()
        .route("/health", get(health_handler))
        .with_state(create_test_state(pool));

    TestServer::new(app).unwrap()
}
