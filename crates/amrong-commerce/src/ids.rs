//! Newtype IDs for type-safe identifiers.
//!
//! A cart line is keyed by an [`ItemId`]: either a menu [`ProductId`] or a
//! synthetic `custom-<millis>` id minted for a custom order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of ids minted for custom orders.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a menu entry, e.g. `spicy-wings`.
    ProductId
);
define_id!(
    /// Identifier of a cart line.
    ItemId
);

impl ItemId {
    /// Mint the id for a custom order placed at `at`.
    pub fn custom(at: DateTime<Utc>) -> Self {
        Self(format!("{}{}", CUSTOM_ID_PREFIX, at.timestamp_millis()))
    }

    /// Check if this line came from the custom order form.
    pub fn is_custom(&self) -> bool {
        self.0.starts_with(CUSTOM_ID_PREFIX)
    }
}

impl From<ProductId> for ItemId {
    fn from(id: ProductId) -> Self {
        Self(id.into_inner())
    }
}

impl From<&ProductId> for ItemId {
    fn from(id: &ProductId) -> Self {
        Self(id.as_str().to_string())
    }
}
