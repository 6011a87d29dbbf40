//! Integration tests for soft-delete and restore behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted items are hidden from `find_by_id` and list queries
//! - Restoring makes an item visible again with its fields unchanged
//! - Double delete / double restore report the state mismatch
//! - `deleted_at` and `deleted_by` always change together
//! - The pattern is uniform across all five content types

use assert_matches::assert_matches;
use chrono::Utc;
use onair_core::content::ContentType;
use onair_core::lifecycle::LifecycleState;
use onair_core::types::DbId;
use onair_db::error::LifecycleError;
use onair_db::models::article::CreateArticle;
use onair_db::models::episode::CreateEpisode;
use onair_db::models::event::CreateEvent;
use onair_db::models::resource::CreateResource;
use onair_db::models::show::CreateShow;
use onair_db::models::user::CreateUser;
use onair_db::repositories::{
    ArticleRepo, ContentRepo, EpisodeRepo, EventRepo, LifecycleRepo, ResourceRepo, ShowRepo,
    UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn editor(pool: &PgPool) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            email: "editor@example.com".to_string(),
            display_name: Some("Night Desk".to_string()),
            role: "editor".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_article(title: &str, slug: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        slug: slug.to_string(),
        summary: Some("summary".to_string()),
        body: Some("body text".to_string()),
        published_at: None,
        protected: None,
    }
}

fn new_show(title: &str, slug: &str) -> CreateShow {
    CreateShow {
        title: title.to_string(),
        slug: slug.to_string(),
        description: None,
        host_name: Some("DJ Test".to_string()),
        artwork_url: None,
        protected: None,
    }
}

/// Create one item of each content type, returning `(type, id)` pairs.
async fn one_of_each(pool: &PgPool) -> Vec<(ContentType, DbId)> {
    let article = ArticleRepo::create(pool, &new_article("Article", "article"))
        .await
        .unwrap();
    let show = ShowRepo::create(pool, &new_show("Morning Show", "morning-show"))
        .await
        .unwrap();
    let episode = EpisodeRepo::create(
        pool,
        &CreateEpisode {
            show_id: show.id,
            title: "Episode 1".to_string(),
            description: None,
            audio_url: None,
            duration_secs: Some(3600),
            aired_at: None,
            protected: None,
        },
    )
    .await
    .unwrap();
    let event = EventRepo::create(
        pool,
        &CreateEvent {
            title: "Open Day".to_string(),
            description: None,
            venue: Some("Studio A".to_string()),
            starts_at: Utc::now(),
            ends_at: None,
            protected: None,
        },
    )
    .await
    .unwrap();
    let resource = ResourceRepo::create(
        pool,
        &CreateResource {
            title: "Press Kit".to_string(),
            description: None,
            url: "https://example.com/press-kit.zip".to_string(),
            category: Some("press".to_string()),
            protected: None,
        },
    )
    .await
    .unwrap();

    vec![
        (ContentType::Articles, article.id),
        (ContentType::Shows, show.id),
        (ContentType::Episodes, episode.id),
        (ContentType::Events, event.id),
        (ContentType::Resources, resource.id),
    ]
}

// ---------------------------------------------------------------------------
// Test: soft_delete hides article from find_by_id and list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_default_listings(pool: PgPool) {
    let actor = editor(&pool).await;
    let article = ArticleRepo::create(&pool, &new_article("Hidden", "hidden"))
        .await
        .unwrap();

    let before = ArticleRepo::list(&pool).await.unwrap();
    assert!(before.iter().any(|a| a.id == article.id));

    LifecycleRepo::soft_delete(&pool, ContentType::Articles, article.id, actor)
        .await
        .unwrap();

    assert!(ArticleRepo::find_by_id(&pool, article.id)
        .await
        .unwrap()
        .is_none());
    let after = ArticleRepo::list(&pool).await.unwrap();
    assert!(
        !after.iter().any(|a| a.id == article.id),
        "article should not appear in list after soft delete"
    );
    let recent = ContentRepo::list_recent(&pool, 50).await.unwrap();
    assert!(
        !recent
            .iter()
            .any(|r| r.content_type == ContentType::Articles && r.id == article.id),
        "recent widget must not leak trashed content"
    );
}

// ---------------------------------------------------------------------------
// Test: lifecycle columns are set together and cleared together
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_at_and_deleted_by_move_together(pool: PgPool) {
    let actor = editor(&pool).await;
    let article = ArticleRepo::create(&pool, &new_article("Pair", "pair"))
        .await
        .unwrap();

    let row = LifecycleRepo::find_include_deleted(&pool, ContentType::Articles, article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.state().unwrap(), LifecycleState::Active);
    assert!(row.deleted_at.is_none() && row.deleted_by.is_none());

    LifecycleRepo::soft_delete(&pool, ContentType::Articles, article.id, actor)
        .await
        .unwrap();
    let row = LifecycleRepo::find_include_deleted(&pool, ContentType::Articles, article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.state().unwrap(), LifecycleState::Deleted);
    assert_eq!(row.deleted_by, Some(actor));

    LifecycleRepo::restore(&pool, ContentType::Articles, article.id)
        .await
        .unwrap();
    let row = LifecycleRepo::find_include_deleted(&pool, ContentType::Articles, article.id)
        .await
        .unwrap()
        .unwrap();
    assert!(row.deleted_at.is_none() && row.deleted_by.is_none());
}

// ---------------------------------------------------------------------------
// Test: the store rejects a half-set lifecycle pair
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_constraint_rejects_half_deleted_rows(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("Half", "half"))
        .await
        .unwrap();

    let result = sqlx::query("UPDATE articles SET deleted_at = NOW() WHERE id = $1")
        .bind(article.id)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "deleted_at without deleted_by must be rejected");
}

// ---------------------------------------------------------------------------
// Test: delete then restore round-trips the item
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_restore_round_trip_preserves_fields(pool: PgPool) {
    let actor = editor(&pool).await;
    let original = ArticleRepo::create(&pool, &new_article("Round Trip", "round-trip"))
        .await
        .unwrap();

    LifecycleRepo::soft_delete(&pool, ContentType::Articles, original.id, actor)
        .await
        .unwrap();
    LifecycleRepo::restore(&pool, ContentType::Articles, original.id)
        .await
        .unwrap();

    let restored = ArticleRepo::find_by_id(&pool, original.id)
        .await
        .unwrap()
        .expect("restored article should be visible");

    // updated_at is bookkeeping and may move.
    let mut comparable = restored.clone();
    comparable.updated_at = original.updated_at;
    assert_eq!(comparable, original);
}

// ---------------------------------------------------------------------------
// Test: second soft_delete reports AlreadyDeleted
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_double_delete_is_already_deleted(pool: PgPool) {
    let actor = editor(&pool).await;
    let article = ArticleRepo::create(&pool, &new_article("Twice", "twice"))
        .await
        .unwrap();

    LifecycleRepo::soft_delete(&pool, ContentType::Articles, article.id, actor)
        .await
        .unwrap();
    let first_row = LifecycleRepo::find_include_deleted(&pool, ContentType::Articles, article.id)
        .await
        .unwrap()
        .unwrap();

    let second = LifecycleRepo::soft_delete(&pool, ContentType::Articles, article.id, actor).await;
    assert_matches!(
        second,
        Err(LifecycleError::AlreadyDeleted { content_type: ContentType::Articles, id }) if id == article.id
    );

    // The failed call left the original deletion untouched.
    let row = LifecycleRepo::find_include_deleted(&pool, ContentType::Articles, article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row, first_row);
}

// ---------------------------------------------------------------------------
// Test: unknown ids are NotFound for both transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_item_is_not_found(pool: PgPool) {
    let actor = editor(&pool).await;

    assert_matches!(
        LifecycleRepo::soft_delete(&pool, ContentType::Events, 999_999, actor).await,
        Err(LifecycleError::NotFound { content_type: ContentType::Events, id: 999_999 })
    );
    assert_matches!(
        LifecycleRepo::restore(&pool, ContentType::Events, 999_999).await,
        Err(LifecycleError::NotFound { content_type: ContentType::Events, id: 999_999 })
    );
}

// ---------------------------------------------------------------------------
// Test: an actor missing from the user projection is rejected, not a store failure
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_by_unknown_actor(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("No Such Editor", "no-such-editor"))
        .await
        .unwrap();

    assert_matches!(
        LifecycleRepo::soft_delete(&pool, ContentType::Articles, article.id, 987_654).await,
        Err(LifecycleError::UnknownActor { actor_id: 987_654 })
    );

    let row = LifecycleRepo::find_include_deleted(&pool, ContentType::Articles, article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.state().unwrap(), LifecycleState::Active);
}

// ---------------------------------------------------------------------------
// Test: restore twice yields success then AlreadyActive
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_restore_twice_reports_already_active(pool: PgPool) {
    let actor = editor(&pool).await;
    let article = ArticleRepo::create(&pool, &new_article("Restore Twice", "restore-twice"))
        .await
        .unwrap();
    LifecycleRepo::soft_delete(&pool, ContentType::Articles, article.id, actor)
        .await
        .unwrap();

    LifecycleRepo::restore(&pool, ContentType::Articles, article.id)
        .await
        .unwrap();
    let second = LifecycleRepo::restore(&pool, ContentType::Articles, article.id).await;
    assert_matches!(second, Err(LifecycleError::AlreadyActive { .. }));

    assert!(ArticleRepo::find_by_id(&pool, article.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Test: concurrent restores -- exactly one wins
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_restores_exactly_one_succeeds(pool: PgPool) {
    let actor = editor(&pool).await;
    let items = one_of_each(&pool).await;
    let (_, episode_id) = items[2];
    LifecycleRepo::soft_delete(&pool, ContentType::Episodes, episode_id, actor)
        .await
        .unwrap();

    let a = tokio::spawn({
        let pool = pool.clone();
        async move { LifecycleRepo::restore(&pool, ContentType::Episodes, episode_id).await }
    });
    let b = tokio::spawn({
        let pool = pool.clone();
        async move { LifecycleRepo::restore(&pool, ContentType::Episodes, episode_id).await }
    });
    let results = [a.await.unwrap(), b.await.unwrap()];

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one restore should succeed");
    assert!(results.iter().any(|r| matches!(
        r,
        Err(LifecycleError::AlreadyActive { .. }) | Err(LifecycleError::NotFound { .. })
    )));
}

// ---------------------------------------------------------------------------
// Test: the same transitions work for every content type
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lifecycle_uniform_across_content_types(pool: PgPool) {
    let actor = editor(&pool).await;

    for (content_type, id) in one_of_each(&pool).await {
        LifecycleRepo::soft_delete(&pool, content_type, id, actor)
            .await
            .unwrap_or_else(|e| panic!("soft_delete {content_type}: {e}"));
        let row = LifecycleRepo::find_include_deleted(&pool, content_type, id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.state().unwrap(), LifecycleState::Deleted, "{content_type}");

        LifecycleRepo::restore(&pool, content_type, id)
            .await
            .unwrap_or_else(|e| panic!("restore {content_type}: {e}"));
        let row = LifecycleRepo::find_include_deleted(&pool, content_type, id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.state().unwrap(), LifecycleState::Active, "{content_type}");
    }
}

// ---------------------------------------------------------------------------
// Test: protection defaults and set_protected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protection_defaults_and_override(pool: PgPool) {
    for (content_type, id) in one_of_each(&pool).await {
        let row = LifecycleRepo::find_include_deleted(&pool, content_type, id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            row.protected,
            content_type.protected_default(),
            "{content_type} protection default"
        );
    }

    let article = ArticleRepo::create(&pool, &new_article("Legal", "legal"))
        .await
        .unwrap();
    let row = LifecycleRepo::set_protected(&pool, ContentType::Articles, article.id, true)
        .await
        .unwrap();
    assert!(row.protected);

    assert_matches!(
        LifecycleRepo::set_protected(&pool, ContentType::Articles, 424_242, true).await,
        Err(LifecycleError::NotFound { .. })
    );
}
