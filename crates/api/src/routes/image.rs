//! Route definitions for image management.

use axum::routing::post;
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Image routes, mounted at the root.
///
/// ```text
/// POST /images-add-link -> add_link
/// POST /images-add-blob -> add_blob (multipart/form-data)
/// POST /images-get      -> get
/// POST /images-delete   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images-add-link", post(image::add_link))
        .route("/images-add-blob", post(image::add_blob))
        .route("/images-get", post(image::get))
        .route("/images-delete", post(image::delete))
}
