//! Client-local preference storage.
//!
//! The browser build persists to `window.localStorage`. Native builds have no
//! durable client storage, so [`LocalStorage`] reports itself unavailable there
//! and callers fall back to their defaults.

#[cfg(test)]
use std::collections::HashMap;

use thiserror::Error;

/// Errors raised by a [`PreferenceStore`]. Callers are expected to recover.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous key/value storage holding opaque string values.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage` wrapper.
pub struct LocalStorage {
    #[cfg(target_arch = "wasm32")]
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Acquire the browser's local storage, if the host exposes one.
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if inner.is_none() {
                tracing::debug!("localStorage unavailable, preferences will not persist");
            }
            Self { inner }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {}
        }
    }
}

impl PreferenceStore for LocalStorage {
    #[cfg(target_arch = "wasm32")]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.inner.as_ref().ok_or(StoreError::Unavailable)?;
        storage.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    #[cfg(target_arch = "wasm32")]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.inner.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// In-process store. Counts successful writes and can be told to fail.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent `get` fail.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every subsequent `set` fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Raw lookup that bypasses failure injection.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Read {
                key: key.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_memory_store_injected_failures() {
        let mut store = MemoryStore::with_entry("k", "v")
            .failing_reads()
            .failing_writes();

        assert!(matches!(store.get("k"), Err(StoreError::Read { .. })));
        assert!(matches!(store.set("k", "w"), Err(StoreError::Write { .. })));
        assert_eq!(store.writes(), 0);
        assert_eq!(store.peek("k"), Some("v"));
    }

    #[test]
    fn test_local_storage_unavailable_natively() {
        let mut store = LocalStorage::open();
        assert_eq!(store.get("selectedTheme"), Err(StoreError::Unavailable));
        assert_eq!(store.set("selectedTheme", "2"), Err(StoreError::Unavailable));
    }
}
