mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

fn member_payload(plan_id: i64) -> serde_json::Value {
    json!({
        "name": "Name1",
        "age": 30,
        "email": "name1@insper.com",
        "plan_id": plan_id,
        "status": true
    })
}

// ─── LIST / GET ─────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_members_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/members").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[sqlx::test]
async fn test_list_members(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    common::create_test_member(&pool, "Name1", "name1@insper.com", plan_id).await;
    common::create_test_member(&pool, "Name2", "name2@insper.com", plan_id).await;
    let server = common::make_server(pool);

    let response = server.get("/members").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].get("member_id").is_some());
    assert_eq!(items[0]["email"], "name1@insper.com");
}

#[sqlx::test]
async fn test_get_member_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/members/999999").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Member not found"
    );
}

// ─── CREATE ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_member(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let server = common::make_server(pool);

    let response = server.post("/members").json(&member_payload(plan_id)).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Name1");
    assert_eq!(body["age"], 30);
    assert_eq!(body["plan_id"], plan_id);
    assert_eq!(body["status"], true);

    let id = body["member_id"].as_i64().unwrap();
    server
        .get(&format!("/members/{id}"))
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_create_member_unknown_plan(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server.post("/members").json(&member_payload(999999)).await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Plan not found"
    );
    assert_eq!(common::count_rows(&pool, "members").await, 0);
}

#[sqlx::test]
async fn test_create_member_invalid_email(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let server = common::make_server(pool);

    let mut payload = member_payload(plan_id);
    payload["email"] = json!("not-an-email");

    let response = server.post("/members").json(&payload).await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert!(body["error"]["details"].get("email").is_some());
}

// ─── UPDATE ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_member_only_changes_supplied_fields(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let id = common::create_test_member(&pool, "Name1", "name1@insper.com", plan_id).await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/members/{id}"))
        .json(&json!({ "age": 41 }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["age"], 41);
    assert_eq!(body["name"], "Name1");
    assert_eq!(body["email"], "name1@insper.com");
    assert_eq!(body["plan_id"], plan_id);
    assert_eq!(body["status"], true);
}

#[sqlx::test]
async fn test_update_member_explicit_nulls_are_ignored(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let id = common::create_test_member(&pool, "Name1", "name1@insper.com", plan_id).await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/members/{id}"))
        .json(&json!({ "name": null, "status": false }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Name1");
    assert_eq!(body["status"], false);
}

#[sqlx::test]
async fn test_update_member_change_plan(pool: PgPool) {
    let basic = common::create_test_plan(&pool, "Basic", 50.0).await;
    let gold = common::create_test_plan(&pool, "Gold", 150.0).await;
    let id = common::create_test_member(&pool, "Name1", "name1@insper.com", basic).await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/members/{id}"))
        .json(&json!({ "plan_id": gold }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["plan_id"], gold);

    let members = server.get(&format!("/plans/{gold}/members")).await;
    assert_eq!(
        members.json::<serde_json::Value>().as_array().unwrap().len(),
        1
    );
}

#[sqlx::test]
async fn test_update_member_unknown_plan(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let id = common::create_test_member(&pool, "Name1", "name1@insper.com", plan_id).await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/members/{id}"))
        .json(&json!({ "plan_id": 999999 }))
        .await;

    response.assert_status_not_found();

    let current = server.get(&format!("/members/{id}")).await;
    assert_eq!(current.json::<serde_json::Value>()["plan_id"], plan_id);
}

#[sqlx::test]
async fn test_update_member_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .put("/members/999999")
        .json(&json!({ "age": 20 }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_member_returns_record(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let id = common::create_test_member(&pool, "Name1", "name1@insper.com", plan_id).await;
    let server = common::make_server(pool.clone());

    let response = server.delete(&format!("/members/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["member_id"], id);
    assert_eq!(body["name"], "Name1");

    assert_eq!(common::count_rows(&pool, "members").await, 0);
}

#[sqlx::test]
async fn test_delete_member_twice_is_not_found(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let id = common::create_test_member(&pool, "Name1", "name1@insper.com", plan_id).await;
    let server = common::make_server(pool);

    server
        .delete(&format!("/members/{id}"))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/members/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_member_frees_plan_for_deletion(pool: PgPool) {
    let plan_id = common::create_test_plan(&pool, "Basic", 50.0).await;
    let id = common::create_test_member(&pool, "Name1", "name1@insper.com", plan_id).await;
    let server = common::make_server(pool);

    server
        .delete(&format!("/plans/{plan_id}"))
        .await
        .assert_status(StatusCode::CONFLICT);

    server
        .delete(&format!("/members/{id}"))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/plans/{plan_id}"))
        .await
        .assert_status_ok();
}
