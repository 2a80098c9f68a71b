use crate::types::DbId;

/// Every failure the product workflow can report.
///
/// Validation failures are resolved locally and returned as data; store
/// failures are logged by the gateway that produced them and then carried
/// upward unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store rejected the write (foreign key or unique constraint).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store could not be reached or failed unexpectedly.
    #[error("Store error: {0}")]
    Store(String),
}
