//! Commerce error types.

use amrong_store::StoreError;
use thiserror::Error;

/// Errors that can occur in ordering operations.
///
/// `Validation` and `EmptyCart` carry the exact message shown to the
/// customer; the rest are infrastructure failures.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A submitted form failed validation.
    #[error("{0}")]
    Validation(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Product id not on the menu.
    #[error("Product not found: {0}")]
    UnknownProduct(String),

    /// Persisting or loading state failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A record could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommerceError {
    /// Build a validation error from a customer-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        CommerceError::Validation(message.into())
    }

    /// Check if the error should be shown to the customer as-is.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, CommerceError::Validation(_) | CommerceError::EmptyCart)
    }
}
