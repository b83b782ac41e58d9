//! Repository for the `categories` table.

use gifcamp_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategorySummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, created_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category for a user, returning the created row.
    pub async fn create(pool: &PgPool, user_id: DbId, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (user_id, name, created_at)
             VALUES ($1, $2, now())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List a user's categories as `{id, name}` pairs, ordered by name ascending.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CategorySummary>, sqlx::Error> {
        sqlx::query_as::<_, CategorySummary>(
            "SELECT id, name FROM categories WHERE user_id = $1 ORDER BY name ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a category only if it is owned by `user_id`.
    ///
    /// Returns `false` when the row does not exist or belongs to another
    /// user; callers report both identically. Images referencing the
    /// deleted category keep their `category_id` (weak reference).
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
