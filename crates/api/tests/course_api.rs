//! HTTP-level integration tests for the `/courses` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;

async fn create_course(pool: &PgPool, name: &str) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/courses",
        serde_json::json!({
            "name": name,
            "description": "An introduction",
            "category": "science",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_returns_201_with_defaults(pool: PgPool) {
    let json = create_course(&pool, "Physics").await;

    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Physics");
    assert_eq!(json["isActive"], true);
    assert_eq!(json["category"], "science");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_course_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/courses",
        serde_json::json!({ "name": "", "description": "d", "category": "c" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_get_course(pool: PgPool) {
    let created = create_course(&pool, "Physics").await;
    create_course(&pool, "Chemistry").await;
    let id = created["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool.clone()), "/courses").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = get(common::build_test_app(pool), &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Physics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_course_updates_only_given_fields(pool: PgPool) {
    let created = create_course(&pool, "Physics").await;
    let id = created["id"].as_i64().unwrap();

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/courses/{id}"),
        serde_json::json!({ "isActive": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["isActive"], false);
    assert_eq!(json["name"], "Physics");
    assert_eq!(json["description"], "An introduction");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_course_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/courses/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_json(
        common::build_test_app(pool.clone()),
        "/courses/999999",
        serde_json::json!({ "name": "x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), "/courses/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_course_returns_204(pool: PgPool) {
    let created = create_course(&pool, "Physics").await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_course_id_returns_json_400(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/courses/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());

    let response = delete(common::build_test_app(pool), "/courses/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
