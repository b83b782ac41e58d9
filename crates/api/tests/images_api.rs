//! HTTP-level integration tests for the image endpoints, including blob
//! uploads against a throwaway local storage root.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_storage, login_user, post_json};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: link-based add and retrieval
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_link_and_get(pool: PgPool) {
    let app = build_test_app(pool);
    let user_id = login_user(app.clone(), "ada@example.com").await;

    let json = body_json(
        post_json(
            app.clone(),
            "/images-add-link",
            json!({
                "userId": user_id,
                "categoryId": 0,
                "imageUrl": "https://example.com/cat.gif"
            }),
        )
        .await,
    )
    .await;
    assert_eq!(json["error"], false);
    let image_id = json["imageId"].as_i64().unwrap();
    assert!(image_id > 0);

    let json = body_json(
        post_json(
            app,
            "/images-get",
            json!({ "userId": user_id, "categoryId": -1 }),
        )
        .await,
    )
    .await;
    assert_eq!(json["error"], false);

    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["id"].as_i64(), Some(image_id));
    // Link-based images come back exactly as stored.
    assert_eq!(images[0]["url"], "https://example.com/cat.gif");
}

// ---------------------------------------------------------------------------
// Test: category filter semantics (-1 all, 0 uncategorized, > 0 exact)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_category_filters(pool: PgPool) {
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

    for (cat, url) in [
        (0, "https://example.com/loose.gif"),
        (category_id, "https://example.com/cat.gif"),
    ] {
        let json = body_json(
            post_json(
                app.clone(),
                "/images-add-link",
                json!({ "userId": user_id, "categoryId": cat, "imageUrl": url }),
            )
            .await,
        )
        .await;
        assert_eq!(json["error"], false);
    }

    let count_for = |filter: i64| {
        let app = app.clone();
        async move {
            let json = body_json(
                post_json(
                    app,
                    "/images-get",
                    json!({ "userId": user_id, "categoryId": filter }),
                )
                .await,
            )
            .await;
            assert_eq!(json["error"], false);
            json["images"].as_array().unwrap().len()
        }
    };

    assert_eq!(count_for(-1).await, 2);
    assert_eq!(count_for(0).await, 1);
    assert_eq!(count_for(category_id).await, 1);
}

// ---------------------------------------------------------------------------
// Test: blob upload writes the file and resolves to a request-based URL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blob_upload_round_trip(pool: PgPool) {
    let root = tempfile::tempdir().expect("tempdir");
    let root_path = root.path().to_string_lossy().to_string();
    let app = build_test_app_with_storage(pool, &root_path);
    let user_id = login_user(app.clone(), "ada@example.com").await;

    let json = body_json(
        common::post_image_upload(
            app.clone(),
            "/images-add-blob",
            user_id,
            0,
            "cat.gif",
            "image/gif",
            b"GIF89a-not-really-a-gif",
        )
        .await,
    )
    .await;
    assert_eq!(json["error"], false, "upload failed: {json}");
    let image_id = json["imageId"].as_i64().unwrap();
    assert!(image_id > 0);

    // The blob landed under the per-user directory.
    let user_dir = root.path().join(user_id.to_string());
    let entries: Vec<_> = std::fs::read_dir(&user_dir)
        .expect("user directory should exist")
        .collect();
    assert_eq!(entries.len(), 1);

    // Retrieval resolves the locator against the request host.
    let json = body_json(
        post_json(
            app.clone(),
            "/images-get",
            json!({ "userId": user_id, "categoryId": -1 }),
        )
        .await,
    )
    .await;
    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);

    let url = images[0]["url"].as_str().unwrap();
    assert!(
        url.ends_with(".gif") && url.contains(&format!("/{user_id}/")),
        "unexpected url {url}"
    );

    // The resolved URL is actually servable, absolute storage root included.
    let path = url
        .strip_prefix("http://localhost:3000")
        .expect("url should resolve against the configured base");
    let response = common::get(app, path).await;
    assert_eq!(response.status(), StatusCode::OK);

    let served = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&served[..], b"GIF89a-not-really-a-gif");
}

// ---------------------------------------------------------------------------
// Test: disallowed extension is rejected before anything is stored
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blob_upload_rejects_bad_extension(pool: PgPool) {
    let root = tempfile::tempdir().expect("tempdir");
    let root_path = root.path().to_string_lossy().to_string();
    let app = build_test_app_with_storage(pool, &root_path);
    let user_id = login_user(app.clone(), "ada@example.com").await;

    let json = body_json(
        common::post_image_upload(
            app,
            "/images-add-blob",
            user_id,
            0,
            "nasty.exe",
            "application/octet-stream",
            b"MZ",
        )
        .await,
    )
    .await;

    assert_eq!(json["error"], true);
    assert_eq!(
        json["description"],
        "Invalid image file. Must be a valid image format and under 10MB"
    );

    // Nothing was written for this user.
    assert!(!root.path().join(user_id.to_string()).exists());
}

// ---------------------------------------------------------------------------
// Test: delete enforces ownership, then actually deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_image(pool: PgPool) {
    let app = build_test_app(pool);
    let owner = login_user(app.clone(), "owner@example.com").await;
    let intruder = login_user(app.clone(), "intruder@example.com").await;

    let image_id = body_json(
        post_json(
            app.clone(),
            "/images-add-link",
            json!({
                "userId": owner,
                "categoryId": 0,
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
            "/images-delete",
            json!({ "userId": intruder, "imageId": image_id }),
        )
        .await,
    )
    .await;
    assert_eq!(json["error"], true);
    assert_eq!(
        json["description"],
        "Image not found or you do not have permission to delete it"
    );

    let json = body_json(
        post_json(
            app.clone(),
            "/images-delete",
            json!({ "userId": owner, "imageId": image_id }),
        )
        .await,
    )
    .await;
    assert_eq!(json["error"], false);

    let json = body_json(
        post_json(
            app,
            "/images-get",
            json!({ "userId": owner, "categoryId": -1 }),
        )
        .await,
    )
    .await;
    assert_eq!(json["images"], json!([]));
}
