//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Key cannot be used with this backend.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failure.
    #[error("Store I/O failed for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Check if this error came from decoding a stored value.
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::SerializeError(_))
    }
}
