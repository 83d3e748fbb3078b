//! Durable storage for the cart.
//!
//! The cart is kept as one JSON string under a fixed key. [`LocalStore`] backs
//! it with the browser's `localStorage`; [`MemoryStore`] keeps it in memory for
//! tests and for pages where storage is blocked.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use web_sys::Storage;

/// Errors from a [`CartStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The host has no usable storage (disabled, sandboxed iframe, ...).
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// A single-slot string store.
pub trait CartStore {
    /// Read the stored value, `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write (quota,
    /// private browsing, ...).
    fn save(&self, value: &str) -> Result<(), StoreError>;
}

/// `localStorage`-backed store.
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStore {
    /// Open `localStorage` for `key`.
    ///
    /// Access can throw (e.g. with cookies disabled); the store then reports
    /// [`StoreError::Unavailable`] on every call instead of failing here.
    #[must_use]
    pub fn open(window: &web_sys::Window, key: &str) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, cart will not persist");
        }
        Self {
            storage,
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl CartStore for LocalStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StoreError::Read {
                key: self.key.clone(),
                reason: format!("{e:?}"),
            })
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|e| StoreError::Write {
                key: self.key.clone(),
                reason: format!("{e:?}"),
            })
    }
}

/// In-memory store.
///
/// Clones share the same slot, so a test can keep a handle while the engine
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
    read_only: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.into()))),
            read_only: false,
        }
    }

    /// Create a store whose writes always fail.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            slot: Rc::default(),
            read_only: true,
        }
    }

    /// The currently stored value.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write {
                key: "memory".to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}
