//! Cart service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartServiceError {
    /// A required field was missing, empty, or zero.
    #[error("invalid payload")]
    InvalidPayload,

    /// No row individually held enough quantity to satisfy a removal.
    #[error("{item} not found in cart or not enough quantity")]
    InsufficientQuantity { item: String },

    /// Storage failure.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
