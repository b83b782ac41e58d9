//! Repository for the `users` table.

use gifcamp_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, picture, method, first_login, last_login";

/// Provides identity-reconciliation operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Look up a user by the `(email, method)` natural key (exact match).
    pub async fn find_by_identity(
        pool: &PgPool,
        email: &str,
        method: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1 AND method = $2");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(method)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user with `first_login = last_login = now()`.
    ///
    /// A concurrent insert for the same `(email, method)` pair fails on
    /// `uq_users_email_method`; callers treat that as a transient error.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, picture, method, first_login, last_login)
             VALUES ($1, $2, $3, $4, now(), now())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.picture)
            .bind(&input.method)
            .fetch_one(pool)
            .await
    }

    /// Overwrite name and picture and stamp `last_login = now()`.
    ///
    /// Email, method, and `first_login` are immutable once created.
    pub async fn record_login(
        pool: &PgPool,
        id: DbId,
        name: &str,
        picture: Option<&str>,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "UPDATE users SET name = $2, picture = $3, last_login = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(name)
            .bind(picture)
            .fetch_one(pool)
            .await
    }

    /// Whether a user row with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
