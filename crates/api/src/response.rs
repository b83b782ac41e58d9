//! Shared response envelope for API handlers.
//!
//! Every endpoint answers HTTP 200 with
//! `{ "error": bool, "description": string, ...payload }`; business
//! failures are signaled through the `error` field, never the status code.
//! Use [`Envelope`] instead of ad-hoc `serde_json::json!` payloads to get
//! compile-time type safety and consistent serialization.

use axum::Json;
use serde::Serialize;

/// Standard response envelope with a flattened payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub error: bool,
    pub description: String,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    /// Success: `error = false`, empty description.
    pub fn ok(payload: T) -> Json<Self> {
        Json(Self {
            error: false,
            description: String::new(),
            payload,
        })
    }
}

impl<T: Serialize + Default> Envelope<T> {
    /// Failure: `error = true` with a user-facing description and the
    /// payload's empty default (`null` ids, empty lists).
    pub fn fail(description: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: true,
            description: description.into(),
            payload: T::default(),
        })
    }
}

/// Payload for endpoints that return nothing beyond the envelope itself.
#[derive(Debug, Default, Serialize)]
pub struct NoData {}
