//! Image entity models and DTOs.
//!
//! An image is either a remote link (`image_url` set) or an uploaded blob
//! (`storage_url` set, holding a backend-relative locator rather than a
//! full URL), never both.

use gifcamp_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: DbId,
    pub user_id: DbId,
    /// 0 means uncategorized; positive values are weak references to
    /// `categories.id` with no enforced integrity.
    pub category_id: DbId,
    pub image_url: Option<String>,
    pub storage_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Category filter for image listing.
///
/// Parsed from the request value: `-1` = everything, `0` = uncategorized
/// only, `> 0` = the given category only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Uncategorized,
    Category(DbId),
}

impl CategoryFilter {
    /// Parse the request-level category id. Values below `-1` are invalid.
    pub fn from_request(category_id: i64) -> Option<Self> {
        match category_id {
            -1 => Some(Self::All),
            0 => Some(Self::Uncategorized),
            id if id > 0 => Some(Self::Category(id)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
