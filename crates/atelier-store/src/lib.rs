//! Typed key-value persistence for Atelier storefront state.
//!
//! Provides a simple, ergonomic API for persisting small pieces of
//! visitor state (wishlist, preferences) under fixed keys with automatic
//! JSON serialization. Backends only deal in bytes; callers work with
//! typed values.
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_store::{FileStore, KeyValueStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Prefs {
//!     grid_view: bool,
//! }
//!
//! let store = FileStore::open("~/.atelier")?;
//!
//! // Store a value
//! store.set("prefs", &Prefs { grid_view: true })?;
//!
//! // Retrieve a value
//! let prefs: Option<Prefs> = store.get("prefs")?;
//!
//! // Delete a value
//! store.delete("prefs")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, MemoryStore, StoreError};
}
