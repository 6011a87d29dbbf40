//! HTTP-level integration tests for soft delete, the trash view, restore,
//! and protection endpoints.
//!
//! Content is created through the API as an editor, then moved through its
//! lifecycle and verified through the public listings and the trash view.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete, delete_auth, get, get_auth, post_auth, post_json_auth,
    put_json_auth, staff, token_for,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_article(pool: &PgPool, token: &str, title: &str, slug: &str) -> i64 {
    let body = json!({ "title": title, "slug": slug });
    let response = post_json_auth(build_test_app(pool.clone()), "/api/v1/articles", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: delete, list, restore scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_list_restore_scenario(pool: PgPool) {
    let (editor_id, token) = staff(&pool, "editor@example.com", "editor").await;
    let id = create_article(&pool, &token, "Breaking News", "breaking-news").await;

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/articles/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Hidden from the public surface.
    let response = get(build_test_app(pool.clone()), &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(get(build_test_app(pool.clone()), "/api/v1/articles").await).await;
    assert!(json.as_array().unwrap().is_empty());

    // Visible in the trash with the deleting editor.
    let response = get_auth(build_test_app(pool.clone()), "/api/v1/admin/trash", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let articles = json["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["id"], id);
    assert_eq!(articles[0]["title"], "Breaking News");
    assert_eq!(articles[0]["deleted_by"], "editor@example.com");
    assert_eq!(articles[0]["deleted_by_id"], editor_id);
    for group in ["shows", "episodes", "events", "resources"] {
        assert!(json[group].as_array().unwrap().is_empty(), "{group} should be empty");
    }

    // Restore.
    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/trash/articles/{id}/restore"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["restored"], true);
    assert_eq!(json["content_type"], "articles");
    assert_eq!(json["id"], id);

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(get_auth(build_test_app(pool), "/api/v1/admin/trash", &token).await).await;
    assert!(json["articles"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: ?type= narrows the listing to one group
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_trash_filtered_by_type(pool: PgPool) {
    let (_, token) = staff(&pool, "filter@example.com", "editor").await;
    let id = create_article(&pool, &token, "Filtered", "filtered").await;
    delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/articles/{id}"),
        &token,
    )
    .await;

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/trash?type=articles",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let groups = json.as_object().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(json["articles"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: unknown content type in a filter is 400, in a path is 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_content_type_rejected(pool: PgPool) {
    let (_, token) = staff(&pool, "unknown@example.com", "editor").await;

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/trash?type=podcasts",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = post_auth(
        build_test_app(pool),
        "/api/v1/admin/trash/podcasts/1/restore",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: deleting twice reports ALREADY_DELETED
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_double_delete_conflicts(pool: PgPool) {
    let (_, token) = staff(&pool, "twice@example.com", "editor").await;
    let id = create_article(&pool, &token, "Twice", "twice").await;
    let uri = format!("/api/v1/articles/{id}");

    let response = delete_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(build_test_app(pool), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "ALREADY_DELETED");
}

// ---------------------------------------------------------------------------
// Test: restore of an active item and of a missing item
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_restore_active_and_missing(pool: PgPool) {
    let (_, token) = staff(&pool, "restore@example.com", "editor").await;
    let id = create_article(&pool, &token, "Live", "live").await;

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/trash/articles/{id}/restore"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "ALREADY_ACTIVE");

    let response = post_auth(
        build_test_app(pool),
        "/api/v1/admin/trash/articles/999999/restore",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: a signed token for a user missing from the local projection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_by_unknown_actor_is_rejected(pool: PgPool) {
    let (_, editor) = staff(&pool, "known@example.com", "editor").await;
    let id = create_article(&pool, &editor, "Orphaned Actor", "orphaned-actor").await;
    let uri = format!("/api/v1/articles/{id}");

    let stranger = token_for(987_654, "editor");
    let response = delete_auth(build_test_app(pool.clone()), &uri, &stranger).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_ACTOR");

    // Nothing was written; the article is still live and deletable.
    let response = get(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = delete_auth(build_test_app(pool), &uri, &editor).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: deleting a missing item is 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_item(pool: PgPool) {
    let (_, token) = staff(&pool, "missing@example.com", "editor").await;
    let response = delete_auth(build_test_app(pool), "/api/v1/shows/424242", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: authentication and role checks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trash_requires_editor(pool: PgPool) {
    let (_, editor) = staff(&pool, "owner@example.com", "editor").await;
    let (_, viewer) = staff(&pool, "viewer@example.com", "viewer").await;
    let id = create_article(&pool, &editor, "Guarded", "guarded").await;
    let uri = format!("/api/v1/articles/{id}");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete_auth(build_test_app(pool.clone()), &uri, &viewer).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(build_test_app(pool.clone()), "/api/v1/admin/trash").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/admin/trash", &viewer).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Still live.
    let response = get(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: purge preview is admin-only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_purge_preview_admin_only(pool: PgPool) {
    let (_, editor) = staff(&pool, "ed@example.com", "editor").await;
    let (_, admin) = staff(&pool, "admin@example.com", "admin").await;
    let id = create_article(&pool, &editor, "Recent", "recent").await;
    delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/articles/{id}"),
        &editor,
    )
    .await;

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/trash/purge-preview",
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/trash/purge-preview",
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_trashed"], 1);
    // Deleted moments ago, so nothing is past retention yet.
    assert_eq!(json["total_eligible"], 0);
    assert_eq!(json["counts_by_type"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Test: protection flag moves the purge deadline of a trashed item
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_protection_on_trashed_item(pool: PgPool) {
    let (_, editor) = staff(&pool, "pe@example.com", "editor").await;
    let (_, admin) = staff(&pool, "pa@example.com", "admin").await;
    let id = create_article(&pool, &editor, "Keep Longer", "keep-longer").await;
    delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/articles/{id}"),
        &editor,
    )
    .await;
    let uri = format!("/api/v1/admin/content/articles/{id}/protection");

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "protected": true }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "protected": true }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["protected"], true);
    assert!(json["deleted_at"].is_string());

    let json = body_json(
        get_auth(
            build_test_app(pool),
            "/api/v1/admin/trash?type=articles",
            &editor,
        )
        .await,
    )
    .await;
    let item = &json["articles"][0];
    assert_eq!(item["protected"], true);
    let deleted_at: chrono::DateTime<chrono::Utc> =
        item["deleted_at"].as_str().unwrap().parse().unwrap();
    let purge_after: chrono::DateTime<chrono::Utc> =
        item["purge_after"].as_str().unwrap().parse().unwrap();
    assert_eq!(purge_after - deleted_at, chrono::Duration::days(60));
}
