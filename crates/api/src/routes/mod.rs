pub mod auth;
pub mod category;
pub mod health;
pub mod image;

use axum::Router;

use crate::state::AppState;

/// Build the root route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login              identity reconciliation (upsert by email + method)
///
/// /category-add       create a category
/// /category-all       list the user's categories
/// /category-delete    ownership-checked delete
///
/// /images-add-link    save an external image URL
/// /images-add-blob    upload an image file (multipart/form-data)
/// /images-get         list images, resolved to displayable URLs
/// /images-delete      ownership-checked delete
/// ```
///
/// Every endpoint is a POST with a JSON body (multipart for blob upload)
/// and answers HTTP 200 with the shared envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(category::router())
        .merge(image::router())
}
