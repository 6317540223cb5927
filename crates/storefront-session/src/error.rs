//! Session store error types.

use thiserror::Error;

/// Errors that can occur in the session stores.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to perform a store operation.
    #[error("Store operation failed: {0}")]
    Store(String),

    /// Quantity must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds the per-line limit.
    #[error("Quantity {0} exceeds limit of {1}")]
    QuantityExceedsLimit(i64, i64),

    /// No cart line with this id.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// The operation needs a signed-in user.
    #[error("Not logged in")]
    NotLoggedIn,
}
