//! Handlers for `/images-add-link`, `/images-add-blob`, `/images-get`,
//! and `/images-delete`.

use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::Json;
use gifcamp_core::types::DbId;
use gifcamp_core::upload;
use gifcamp_db::models::image::CategoryFilter;
use gifcamp_db::repositories::{ImageRepo, UserRepo};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::request_base::request_base_url;
use crate::response::{Envelope, NoData};
use crate::state::AppState;

const INVALID_IMAGE_FILE: &str = "Invalid image file. Must be a valid image format and under 10MB";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAddLinkRequest {
    #[serde(default)]
    pub user_id: DbId,
    #[serde(default)]
    pub category_id: DbId,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesGetRequest {
    #[serde(default)]
    pub user_id: DbId,
    #[serde(default)]
    pub category_id: DbId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDeleteRequest {
    #[serde(default)]
    pub user_id: DbId,
    #[serde(default)]
    pub image_id: DbId,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAddPayload {
    pub image_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub id: DbId,
    pub url: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesPayload {
    pub images: Vec<ImageItem>,
}

/// An absolute http/https URL is required for link-based images.
fn is_valid_image_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// POST /images-add-link
pub async fn add_link(
    State(state): State<AppState>,
    Json(req): Json<ImageAddLinkRequest>,
) -> Json<Envelope<ImageAddPayload>> {
    tracing::info!(
        user_id = req.user_id,
        category_id = req.category_id,
        "images-add-link requested"
    );

    if req.user_id <= 0 {
        tracing::warn!(user_id = req.user_id, "images-add-link rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    }

    if req.category_id < 0 {
        tracing::warn!(
            category_id = req.category_id,
            "images-add-link rejected: invalid category id"
        );
        return Envelope::fail("CategoryId must be 0 or greater");
    }

    if !is_valid_image_url(req.image_url.trim()) {
        tracing::warn!(image_url = %req.image_url, "images-add-link rejected: invalid url");
        return Envelope::fail("Valid ImageUrl is required");
    }

    match UserRepo::exists(&state.pool, req.user_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = req.user_id, "images-add-link rejected: user not found");
            return Envelope::fail("User not found");
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to verify user");
            return Envelope::fail("An error occurred while adding the image.");
        }
    }

    match ImageRepo::create_link(
        &state.pool,
        req.user_id,
        req.category_id,
        req.image_url.trim(),
    )
    .await
    {
        Ok(image) => {
            tracing::info!(image_id = image.id, user_id = req.user_id, "image link added");
            Envelope::ok(ImageAddPayload {
                image_id: Some(image.id),
            })
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to add image link");
            Envelope::fail("An error occurred while adding the image.")
        }
    }
}

/// POST /images-add-blob (multipart/form-data: `userId`, `categoryId`, `image`)
///
/// The file must pass extension, size, and content-type validation before
/// the storage backend is touched; any storage failure (including missing
/// object-storage configuration) is reported as the generic invalid-file
/// outcome.
pub async fn add_blob(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<Envelope<ImageAddPayload>> {
    tracing::info!("images-add-blob requested");

    let mut user_id_raw: Option<String> = None;
    let mut category_id_raw: Option<String> = None;
    let mut file: Option<(String, String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(error = %err, "images-add-blob rejected: unreadable form data");
                return Envelope::fail("Request must be multipart/form-data");
            }
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "userId" => match field.text().await {
                Ok(text) => user_id_raw = Some(text),
                Err(err) => {
                    tracing::warn!(error = %err, "images-add-blob rejected: unreadable form data");
                    return Envelope::fail("Request must be multipart/form-data");
                }
            },
            "categoryId" => match field.text().await {
                Ok(text) => category_id_raw = Some(text),
                Err(err) => {
                    tracing::warn!(error = %err, "images-add-blob rejected: unreadable form data");
                    return Envelope::fail("Request must be multipart/form-data");
                }
            },
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                match field.bytes().await {
                    Ok(data) => file = Some((file_name, content_type, data.to_vec())),
                    Err(err) => {
                        tracing::warn!(error = %err, "images-add-blob rejected: unreadable image field");
                        return Envelope::fail(INVALID_IMAGE_FILE);
                    }
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let Some(user_id) = user_id_raw.and_then(|raw| raw.trim().parse::<DbId>().ok()) else {
        tracing::warn!("images-add-blob rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    };

    let Some(category_id) = category_id_raw.and_then(|raw| raw.trim().parse::<DbId>().ok()) else {
        tracing::warn!("images-add-blob rejected: invalid category id");
        return Envelope::fail("Valid CategoryId is required");
    };

    let Some((file_name, content_type, data)) = file.filter(|(_, _, data)| !data.is_empty())
    else {
        tracing::warn!("images-add-blob rejected: no image file provided");
        return Envelope::fail("Image file is required");
    };

    tracing::info!(
        user_id,
        category_id,
        file_name = %file_name,
        size = data.len(),
        "images-add-blob processing"
    );

    if user_id <= 0 {
        tracing::warn!(user_id, "images-add-blob rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    }

    if category_id < 0 {
        tracing::warn!(category_id, "images-add-blob rejected: invalid category id");
        return Envelope::fail("CategoryId must be 0 or greater");
    }

    match UserRepo::exists(&state.pool, user_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id, "images-add-blob rejected: user not found");
            return Envelope::fail("User not found");
        }
        Err(err) => {
            tracing::error!(error = %err, user_id, "failed to verify user");
            return Envelope::fail("An error occurred while adding the image.");
        }
    }

    // Extension, size, and MIME checks run before any storage write.
    let extension = match upload::validate_upload(&file_name, data.len(), &content_type) {
        Ok(extension) => extension,
        Err(err) => {
            tracing::warn!(error = %err, file_name = %file_name, "images-add-blob rejected");
            return Envelope::fail(INVALID_IMAGE_FILE);
        }
    };

    let locator = match state
        .store
        .save(&data, user_id, &extension, &content_type)
        .await
    {
        Ok(locator) => locator,
        Err(err) => {
            tracing::error!(error = %err, user_id, "failed to save image blob");
            return Envelope::fail(INVALID_IMAGE_FILE);
        }
    };

    match ImageRepo::create_blob(&state.pool, user_id, category_id, &locator).await {
        Ok(image) => {
            tracing::info!(
                image_id = image.id,
                user_id,
                locator = %locator,
                "image blob added"
            );
            Envelope::ok(ImageAddPayload {
                image_id: Some(image.id),
            })
        }
        Err(err) => {
            tracing::error!(error = %err, user_id, "failed to add image blob");
            Envelope::fail("An error occurred while adding the image.")
        }
    }
}

/// POST /images-get
///
/// `categoryId` filter: `-1` = all images, `0` = uncategorized only,
/// `> 0` = the given category only. Blob-based images are resolved to
/// public URLs against the request-derived base; link-based images return
/// their stored URL as-is.
pub async fn get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ImagesGetRequest>,
) -> Json<Envelope<ImagesPayload>> {
    tracing::info!(
        user_id = req.user_id,
        category_id = req.category_id,
        "images-get requested"
    );

    if req.user_id <= 0 {
        tracing::warn!(user_id = req.user_id, "images-get rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    }

    let Some(filter) = CategoryFilter::from_request(req.category_id) else {
        tracing::warn!(
            category_id = req.category_id,
            "images-get rejected: invalid category id"
        );
        return Envelope::fail("CategoryId must be -1, 0, or a positive integer");
    };

    match UserRepo::exists(&state.pool, req.user_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = req.user_id, "images-get rejected: user not found");
            return Envelope::fail("User not found");
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to verify user");
            return Envelope::fail("An error occurred while fetching images.");
        }
    }

    match ImageRepo::list_by_user(&state.pool, req.user_id, filter).await {
        Ok(images) => {
            let base = request_base_url(&headers, &state.config.public_base_url);
            let items: Vec<ImageItem> = images
                .into_iter()
                .map(|image| {
                    let url = match image.storage_url.as_deref() {
                        Some(locator) if !locator.is_empty() => {
                            state.store.public_url(locator, &base)
                        }
                        _ => image.image_url.unwrap_or_default(),
                    };
                    ImageItem { id: image.id, url }
                })
                .collect();

            tracing::info!(user_id = req.user_id, count = items.len(), "images retrieved");
            Envelope::ok(ImagesPayload { images: items })
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to fetch images");
            Envelope::fail("An error occurred while fetching images.")
        }
    }
}

/// POST /images-delete
///
/// Ownership-checked delete, symmetric with `/category-delete`.
pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<ImageDeleteRequest>,
) -> Json<Envelope<NoData>> {
    tracing::info!(
        user_id = req.user_id,
        image_id = req.image_id,
        "images-delete requested"
    );

    if req.user_id <= 0 {
        tracing::warn!(user_id = req.user_id, "images-delete rejected: invalid user id");
        return Envelope::fail("Valid UserId is required");
    }

    if req.image_id <= 0 {
        tracing::warn!(image_id = req.image_id, "images-delete rejected: invalid image id");
        return Envelope::fail("Valid ImageId is required");
    }

    match UserRepo::exists(&state.pool, req.user_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(user_id = req.user_id, "images-delete rejected: user not found");
            return Envelope::fail("User not found");
        }
        Err(err) => {
            tracing::error!(error = %err, user_id = req.user_id, "failed to verify user");
            return Envelope::fail("An error occurred while deleting the image.");
        }
    }

    match ImageRepo::delete_owned(&state.pool, req.image_id, req.user_id).await {
        Ok(true) => {
            tracing::info!(image_id = req.image_id, user_id = req.user_id, "image deleted");
            Envelope::ok(NoData {})
        }
        Ok(false) => {
            tracing::warn!(
                image_id = req.image_id,
                user_id = req.user_id,
                "images-delete rejected: not found or not owned"
            );
            Envelope::fail("Image not found or you do not have permission to delete it")
        }
        Err(err) => {
            tracing::error!(error = %err, image_id = req.image_id, "failed to delete image");
            Envelope::fail("An error occurred while deleting the image.")
        }
    }
}
