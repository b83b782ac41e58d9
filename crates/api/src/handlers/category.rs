//! Handlers for `/category-add`, `/category-all`, and `/category-delete`.

use axum::extract::State;
use axum::Json;
use gifcamp_core::types::DbId;
use gifcamp_db::models::category::CategorySummary;
use gifcamp_db::repositories::{CategoryRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::response::{Envelope, NoData};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAddRequest {
    #[serde(default)]
    pub user_id: DbId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesAllRequest {
    #[serde(default)]
    pub user_id: DbId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDeleteRequest {
    #[serde(default)]
    pub user_id: DbId,
    #[serde(default)]
    pub category_id: DbId,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAddPayload {
    pub category_id: Option<DbId>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesPayload {
    pub categories: Vec<CategorySummary>,
}

/// POST /category-add
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<CategoryAddRequest>,
) -> Json<Envelope<CategoryAddPayload>> {
    tracing::info!(user_id = req.user_id, name = %req.name, "category-add requested");

    if req.user_id <= 0 {
        tracing::warn!(user_id = req.user_id, "category-add rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    }

    if req.name.trim().is_empty() {
        tracing::warn!(user_id = req.user_id, "category-add rejected: name missing");
        return Envelope::fail("Name is required");
    }

    match UserRepo::exists(&state.pool, req.user_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = req.user_id, "category-add rejected: user not found");
            return Envelope::fail("User not found");
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to verify user");
            return Envelope::fail("An error occurred while creating the category.");
        }
    }

    match CategoryRepo::create(&state.pool, req.user_id, req.name.trim()).await {
        Ok(category) => {
            tracing::info!(category_id = category.id, user_id = req.user_id, "category created");
            Envelope::ok(CategoryAddPayload {
                category_id: Some(category.id),
            })
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to create category");
            Envelope::fail("An error occurred while creating the category.")
        }
    }
}

/// POST /category-all
///
/// Lists the user's categories ordered by name ascending; a user with no
/// categories gets an empty list with `error = false`.
pub async fn all(
    State(state): State<AppState>,
    Json(req): Json<CategoriesAllRequest>,
) -> Json<Envelope<CategoriesPayload>> {
    tracing::info!(user_id = req.user_id, "category-all requested");

    if req.user_id <= 0 {
        tracing::warn!(user_id = req.user_id, "category-all rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    }

    match UserRepo::exists(&state.pool, req.user_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = req.user_id, "category-all rejected: user not found");
            return Envelope::fail("User not found");
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to verify user");
            return Envelope::fail("An error occurred while fetching categories.");
        }
    }

    match CategoryRepo::list_by_user(&state.pool, req.user_id).await {
        Ok(categories) => {
            tracing::info!(
                user_id = req.user_id,
                count = categories.len(),
                "categories retrieved"
            );
            Envelope::ok(CategoriesPayload { categories })
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to fetch categories");
            Envelope::fail("An error occurred while fetching categories.")
        }
    }
}

/// POST /category-delete
///
/// Ownership-checked delete: a category belonging to a different user is
/// reported identically to a missing one, and images referencing the
/// deleted category are left untouched.
pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<CategoryDeleteRequest>,
) -> Json<Envelope<NoData>> {
    tracing::info!(
        user_id = req.user_id,
        category_id = req.category_id,
        "category-delete requested"
    );

    if req.user_id <= 0 {
        tracing::warn!(user_id = req.user_id, "category-delete rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    }

    if req.category_id <= 0 {
        tracing::warn!(
            category_id = req.category_id,
            "category-delete rejected: invalid category id"
        );
        return Envelope::fail("Valid CategoryId is required");
    }

    match UserRepo::exists(&state.pool, req.user_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = req.user_id, "category-delete rejected: user not found");
            return Envelope::fail("User not found");
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to verify user");
            return Envelope::fail("An error occurred while deleting the category.");
        }
    }

    match CategoryRepo::delete_owned(&state.pool, req.category_id, req.user_id).await {
        Ok(true) => {
            tracing::info!(
                category_id = req.category_id,
                user_id = req.user_id,
                "category deleted"
            );
            Envelope::ok(NoData {})
        }
        Ok(false) => {
            tracing::warn!(
                category_id = req.category_id,
                user_id = req.user_id,
                "category-delete rejected: not found or not owned"
            );
            Envelope::fail("Category not found or you do not have permission to delete it")
        }
        Err(err) => {
            tracing::error!(error = %err, category_id = req.category_id, "failed to delete category");
            Envelope::fail("An error occurred while deleting the category.")
        }
    }
}
