//! Key-Value Storage
//!
//! Thin adapter over a synchronous string-keyed store (the browser's
//! `localStorage` in the app, an in-memory map in tests). Values are JSON.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Errors raised on the write side of a store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {key}: {reason}")]
    Write { key: String, reason: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string store
///
/// Reads never fail: anything unreadable is reported as absent.
pub trait KeyValueStore {
    /// Raw string stored under `key`
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Replace the string stored under `key`
    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry, bypassing serialization
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose writes always fail, as when the quota is exceeded
#[cfg(test)]
#[derive(Debug)]
pub struct FailingStore {
    inner: MemoryStore,
}

#[cfg(test)]
impl FailingStore {
    pub fn with_raw(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryStore::new().with_raw(key, value),
        }
    }
}

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.inner.get_raw(key)
    }

    fn set_raw(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "QuotaExceededError".to_string(),
        })
    }
}

/// Read `key`, or `fallback` when it is missing, `null`, malformed or the wrong shape
pub fn get<T, S>(store: &S, key: &str, fallback: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_raw(key) else {
        return fallback;
    };
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(Some(value)) => value,
        Ok(None) => fallback,
        Err(e) => {
            log::warn!("ignoring unreadable entry {:?}: {}", key, e);
            fallback
        }
    }
}

/// Serialize `value` and store it under `key`, replacing any previous value
pub fn set<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set_raw(key, &json)
}
