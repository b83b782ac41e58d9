//! HTTP-level integration tests for the category endpoints.

mod common;

use common::{body_json, build_test_app, login_user, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: add then list round trip, sorted by name
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_and_list_categories(pool: PgPool) {
    let app = build_test_app(pool);
    let user_id = login_user(app.clone(), "ada@example.com").await;

    for name in ["Reactions", "Animals", "Memes"] {
        let json = body_json(
            post_json(
                app.clone(),
                "/category-add",
                json!({ "userId": user_id, "name": name }),
            )
            .await,
        )
        .await;
        assert_eq!(json["error"], false, "adding {name:?} failed: {json}");
        assert!(json["categoryId"].as_i64().unwrap() > 0);
    }

    let json = body_json(
        post_json(app, "/category-all", json!({ "userId": user_id })).await,
    )
    .await;
    assert_eq!(json["error"], false);

    let names: Vec<&str> = json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Animals", "Memes", "Reactions"]);
}

// ---------------------------------------------------------------------------
// Test: listing with no categories returns an empty success
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_empty(pool: PgPool) {
    let app = build_test_app(pool);
    let user_id = login_user(app.clone(), "ada@example.com").await;

    let json = body_json(
        post_json(app, "/category-all", json!({ "userId": user_id })).await,
    )
    .await;

    assert_eq!(json["error"], false);
    assert_eq!(json["categories"], json!([]));
}

// ---------------------------------------------------------------------------
// Test: unknown user is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_user_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let json = body_json(
        post_json(app, "/category-add", json!({ "userId": 9999, "name": "Cats" })).await,
    )
    .await;

    assert_eq!(json["error"], true);
    assert_eq!(json["description"], "User not found");
}

// ---------------------------------------------------------------------------
// Test: delete removes the category, leaves images dangling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_leaves_images_in_place(pool: PgPool) {
    let app = build_test_app(pool);
    let user_id = login_user(app.clone(), "ada@example.com").await;

    let category_id = body_json(
        post_json(
            app.clone(),
            "/category-add",
            json!({ "userId": user_id, "name": "Cats" }),
        )
        .await,
    )
    .await["categoryId"]
        .as_i64()
        .unwrap();

    let image_id = body_json(
        post_json(
            app.clone(),
            "/images-add-link",
            json!({
                "userId": user_id,
                "categoryId": category_id,
                "imageUrl": "https://example.com/cat.gif"
            }),
        )
        .await,
    )
    .await["imageId"]
        .as_i64()
        .unwrap();

    let json = body_json(
        post_json(
            app.clone(),
            "/category-delete",
            json!({ "userId": user_id, "categoryId": category_id }),
        )
        .await,
    )
    .await;
    assert_eq!(json["error"], false);

    // The image survives and is still visible in the unfiltered listing.
    let all = body_json(
        post_json(
            app.clone(),
            "/images-get",
            json!({ "userId": user_id, "categoryId": -1 }),
        )
        .await,
    )
    .await;
    assert!(all["images"]
        .as_array()
        .unwrap()
        .iter()
        .any(|i| i["id"].as_i64() == Some(image_id)));

    // And the category itself is gone from the listing.
    let json = body_json(
        post_json(
            app,
            "/category-all",
            json!({ "userId": user_id }),
        )
        .await,
    )
    .await;
    assert_eq!(json["categories"], json!([]));
}

// ---------------------------------------------------------------------------
// Test: ownership is enforced on delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_requires_ownership(pool: PgPool) {
    let app = build_test_app(pool);
    let owner = login_user(app.clone(), "owner@example.com").await;
    let intruder = login_user(app.clone(), "intruder@example.com").await;

    let category_id = body_json(
        post_json(
            app.clone(),
            "/category-add",
            json!({ "userId": owner, "name": "Private" }),
        )
        .await,
    )
    .await["categoryId"]
        .as_i64()
        .unwrap();

    let json = body_json(
        post_json(
            app.clone(),
            "/category-delete",
            json!({ "userId": intruder, "categoryId": category_id }),
        )
        .await,
    )
    .await;
    assert_eq!(json["error"], true);
    assert_eq!(
        json["description"],
        "Category not found or you do not have permission to delete it"
    );

    // Still there for the owner.
    let json = body_json(
        post_json(app, "/category-all", json!({ "userId": owner })).await,
    )
    .await;
    assert_eq!(json["categories"].as_array().unwrap().len(), 1);
}
