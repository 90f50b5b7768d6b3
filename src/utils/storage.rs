//! Web Storage access.
//!
//! [`KeyValueStore`] is the seam between the page components and the
//! browser's `localStorage` / `sessionStorage`. [`WebStorage`] is the browser
//! implementation; [`MemoryStorage`] backs native tests.
//!
//! JSON helpers report read outcomes through [`StoredValue`] instead of
//! swallowing errors, so "corrupt storage is non-fatal" stays visible at the
//! call site.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Serialize, de::DeserializeOwned};
use web_sys::Storage;

use super::dom;
use crate::core::error::StorageError;
use crate::models::StoredValue;

/// String key-value storage.
pub trait KeyValueStore {
    /// Read a key. `Ok(None)` when the key is not set.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

// =============================================================================
// Browser Storage
// =============================================================================

/// A browser storage area, or nothing if the browser refused access.
#[derive(Debug, Clone)]
pub struct WebStorage {
    inner: Option<Storage>,
}

impl WebStorage {
    /// `localStorage`, persisted across sessions.
    pub fn local() -> Self {
        Self {
            inner: dom::local_storage(),
        }
    }

    /// `sessionStorage`, cleared when the tab closes.
    pub fn session() -> Self {
        Self {
            inner: dom::session_storage(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::ReadFailed)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}

// =============================================================================
// In-memory Storage
// =============================================================================

/// Storage kept in a `HashMap`, for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage whose writes fail, like a full quota.
    pub fn read_only(self) -> Self {
        Self {
            read_only: true,
            ..self
        }
    }

    /// Raw value for a key.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::WriteFailed);
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// JSON Helpers
// =============================================================================

/// Read and parse a JSON value.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> StoredValue<T> {
    match store.get_item(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => StoredValue::Present(value),
            Err(e) => StoredValue::Corrupt(e.to_string()),
        },
        Ok(None) => StoredValue::Absent,
        Err(e) => StoredValue::Unreadable(e),
    }
}

/// Serialize and store a JSON value.
pub fn write_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    data: &T,
) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(data).map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    store.set_item(key, &json)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_read_json_absent() {
        let store = MemoryStorage::new();
        assert_eq!(read_json::<u32>(&store, "k"), StoredValue::Absent);
    }

    #[test]
    fn test_read_json_corrupt() {
        let store = MemoryStorage::with_item("k", "{not json");
        assert!(matches!(
            read_json::<BTreeMap<String, u64>>(&store, "k"),
            StoredValue::Corrupt(_)
        ));
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStorage::new();
        let data: BTreeMap<String, u64> = [("a/b".to_string(), 5)].into_iter().collect();

        write_json(&store, "k", &data).unwrap();

        assert_eq!(store.peek("k").as_deref(), Some(r#"{"a/b":5}"#));
        assert_eq!(read_json(&store, "k"), StoredValue::Present(data));
    }

    #[test]
    fn test_read_only_storage_rejects_writes() {
        let store = MemoryStorage::with_item("k", "1").read_only();

        assert_eq!(store.set_item("k", "2"), Err(StorageError::WriteFailed));
        assert_eq!(store.peek("k").as_deref(), Some("1"));
    }

    #[test]
    fn test_rc_store_shares_state() {
        let store = Rc::new(MemoryStorage::new());
        let handle = Rc::clone(&store);

        handle.set_item("theme", "dark").unwrap();

        assert_eq!(store.peek("theme").as_deref(), Some("dark"));
    }
}
