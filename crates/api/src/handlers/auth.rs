//! Handler for `/login`: identity reconciliation keyed by `(email, method)`.

use axum::extract::State;
use axum::Json;
use gifcamp_db::models::user::{CreateUser, User};
use gifcamp_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::response::Envelope;
use crate::state::AppState;

const LOGIN_FAILED: &str = "An error occurred while processing your login request.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub method: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub user: Option<User>,
}

/// POST /login
///
/// Idempotent upsert by the `(email, method)` natural key. An existing row
/// gets name, picture, and `lastLogin` overwritten; a new row is created
/// with `firstLogin = lastLogin`. Id, email, method, and `firstLogin`
/// never change after creation.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Json<Envelope<LoginPayload>> {
    tracing::info!(email = %req.email, method = %req.method, "login requested");

    if req.email.trim().is_empty() || req.method.trim().is_empty() {
        tracing::warn!("login rejected: email or method missing");
        return Envelope::fail("Email and Method are required");
    }

    let existing = match UserRepo::find_by_identity(&state.pool, &req.email, &req.method).await {
        Ok(user) => user,
        Err(err) => {
            tracing::error!(error = %err, email = %req.email, "failed to look up user identity");
            return Envelope::fail(LOGIN_FAILED);
        }
    };

    let saved = match existing {
        Some(user) => {
            tracing::debug!(user_id = user.id, "existing identity found, updating");
            UserRepo::record_login(&state.pool, user.id, &req.name, req.picture.as_deref()).await
        }
        None => {
            tracing::debug!(email = %req.email, method = %req.method, "no existing identity, creating");
            UserRepo::create(
                &state.pool,
                &CreateUser {
                    name: req.name.clone(),
                    email: req.email.clone(),
                    picture: req.picture.clone(),
                    method: req.method.clone(),
                },
            )
            .await
        }
    };

    match saved {
        Ok(user) => {
            tracing::info!(user_id = user.id, "login reconciled");
            Envelope::ok(LoginPayload { user: Some(user) })
        }
        Err(err) => {
            // A concurrent first login for the same pair can land here via
            // uq_users_email_method; transient, the client just retries.
            tracing::error!(error = %err, email = %req.email, "failed to persist login");
            Envelope::fail(LOGIN_FAILED)
        }
    }
}
