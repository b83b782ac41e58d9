use crate::types::DbId;

/// Domain-level error type.
///
/// Handlers translate these into the uniform response envelope; the
/// variant message is never returned to the client for `Internal`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed a validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist (or is not owned by the caller).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// An internal failure that must not leak detail to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}
