//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the durable slot.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the slot backend.
    #[error("failed to open slot: {0}")]
    Open(String),

    /// Failed to serialize the cart payload.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to perform a slot operation.
    #[error("slot operation failed: {0}")]
    Backend(String),

    /// A cart mutation was rejected; nothing was persisted.
    #[error(transparent)]
    Cart(#[from] bodega_cart::CartError),
}
