//! String key-value store for the persisted theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`. When storage is blocked
//! (private browsing, sandboxed iframes) the page falls back to
//! [`MemoryStore`], which keeps the toggle working for the session.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Opaque persistent string store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Session-only store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open `localStorage`, or `None` when the browser refuses access.
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read failed for {key}: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::warn!("localStorage write failed for {key}: {err:?}");
        }
    }
}

/// The best store this page can get.
pub fn open_default_store() -> Box<dyn PreferenceStore> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(store) = LocalStore::open() {
            return Box::new(store);
        }
    }
    Box::new(MemoryStore::default())
}
