//! Repository for the `images` table.

use gifcamp_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::{CategoryFilter, Image};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, category_id, image_url, storage_url";

/// Provides CRUD operations for images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a link-based image (`storage_url` stays NULL).
    pub async fn create_link(
        pool: &PgPool,
        user_id: DbId,
        category_id: DbId,
        image_url: &str,
    ) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (user_id, category_id, image_url, storage_url)
             VALUES ($1, $2, $3, NULL)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(user_id)
            .bind(category_id)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// Insert a blob-based image storing the backend-relative locator
    /// (`image_url` stays NULL).
    pub async fn create_blob(
        pool: &PgPool,
        user_id: DbId,
        category_id: DbId,
        storage_url: &str,
    ) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (user_id, category_id, image_url, storage_url)
             VALUES ($1, $2, NULL, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(user_id)
            .bind(category_id)
            .bind(storage_url)
            .fetch_one(pool)
            .await
    }

    /// List a user's images, optionally narrowed by category.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        filter: CategoryFilter,
    ) -> Result<Vec<Image>, sqlx::Error> {
        match filter {
            CategoryFilter::All => {
                let query = format!("SELECT {COLUMNS} FROM images WHERE user_id = $1");
                sqlx::query_as::<_, Image>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
            CategoryFilter::Uncategorized => {
                let query =
                    format!("SELECT {COLUMNS} FROM images WHERE user_id = $1 AND category_id = 0");
                sqlx::query_as::<_, Image>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
            CategoryFilter::Category(category_id) => {
                let query =
                    format!("SELECT {COLUMNS} FROM images WHERE user_id = $1 AND category_id = $2");
                sqlx::query_as::<_, Image>(&query)
                    .bind(user_id)
                    .bind(category_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Delete an image only if it is owned by `user_id`.
    ///
    /// Returns `false` when the row does not exist or belongs to another user.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
