//! Type-safe key-value persistence for the Amrong ordering core.
//!
//! Values are stored as JSON under plain string keys, the same shape a
//! browser's local storage would hold. Two backends are provided:
//!
//! - [`MemoryStore`]: an in-process map, for tests and throwaway sessions
//! - [`FileStore`]: a directory with one `<key>.json` file per key
//!
//! # Example
//!
//! ```rust,ignore
//! use amrong_store::Store;
//!
//! let store = Store::open_dir(".amrong")?;
//!
//! // Store a value
//! store.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<Item>> = store.get("cart")?;
//!
//! // Delete a value
//! store.delete("cart")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KvStore, Store};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KvStore, MemoryStore, Store, StoreError};
}
