//! Key-value persistence for the note list.
//! `LocalStorage` is used in the browser; `MemoryStorage` backs tests and browsers that refuse storage access.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("stored notes could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("notes could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("storage write failed: {0}")]
    Write(String),
}

pub trait NoteStorage {
    /// `Ok(None)` when the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`, resolved on every call so a page without storage degrades instead of panicking.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }

    pub fn is_available() -> bool {
        Self::handle().is_ok()
    }
}

impl NoteStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::handle()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// In-memory slots. Clones share the same map so a test can inspect what the store wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_item(key: &str, value: &str) -> Self {
        let s = Self::new();
        s.slots.borrow_mut().insert(key.to_string(), value.to_string());
        s
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl NoteStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Picks `localStorage` when the browser grants it, memory otherwise.
#[derive(Debug, Clone)]
pub enum BrowserStorage {
    Local(LocalStorage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn new() -> Self {
        if LocalStorage::is_available() {
            BrowserStorage::Local(LocalStorage)
        } else {
            BrowserStorage::Memory(MemoryStorage::new())
        }
    }
}

impl NoteStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            BrowserStorage::Local(s) => s.read(key),
            BrowserStorage::Memory(s) => s.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStorage::Local(s) => s.write(key, value),
            BrowserStorage::Memory(s) => s.write(key, value),
        }
    }
}

/// Backend that refuses every read and write, like a browser with storage blocked or full.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStorage;

#[cfg(test)]
impl NoteStorage for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write("QuotaExceededError".into()))
    }
}
