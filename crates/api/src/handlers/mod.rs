//! Request handlers.
//!
//! Every handler answers HTTP 200 with the shared envelope; validation
//! runs first, then the user-exists check, then the single persistence
//! operation. Internal failures are logged and reduced to a generic
//! user-facing description.

pub mod auth;
pub mod category;
pub mod image;
