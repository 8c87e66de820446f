//! Key-value storage with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// A keyed slot store with automatic JSON serialization.
///
/// Backends implement the raw byte operations; the typed `get`/`set`
/// wrappers layer `serde_json` on top so callers never touch bytes.
///
/// A missing key is `Ok(None)`, never an error. Deleting a missing key
/// is a no-op.
pub trait KeyValueStore {
    /// Read the raw bytes stored under `key`, if any.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write raw bytes under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete the value stored under `key`.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` currently has a stored value.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// Get and deserialize the value stored under `key`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let wishlist: Option<Vec<Product>> = store.get("atelier-wishlist")?;
    /// ```
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a value under `key`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("atelier-wishlist", &wishlist)?;
    /// ```
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }
}

/// Helper to build store keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = store_key!("wishlist", visitor_id);
/// // Returns "wishlist:v123"
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
