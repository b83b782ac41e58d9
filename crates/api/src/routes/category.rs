//! Route definitions for category management.

use axum::routing::post;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes, mounted at the root.
///
/// ```text
/// POST /category-add    -> add
/// POST /category-all    -> all
/// POST /category-delete -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/category-add", post(category::add))
        .route("/category-all", post(category::all))
        .route("/category-delete", post(category::delete))
}
