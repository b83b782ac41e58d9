//! User entity models and DTOs.

use gifcamp_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
///
/// `(email, method)` is unique; it is the natural key for login
/// reconciliation, not `id`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub method: String,
    pub first_login: Timestamp,
    pub last_login: Timestamp,
}

/// DTO for creating a new user on first login.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub method: String,
}
