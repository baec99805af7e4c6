//! Per-request key/value context shared across the dispatch chain.
//!
//! A [`Registry`] is created once per dispatch, seeded by the dispatcher,
//! handed to the handler factory and dropped when the request ends. It never
//! crosses a concurrency boundary, so it carries no synchronization.
//!
//! Keys are write-once: a `set` on an existing key is rejected with
//! [`RegistryError::DuplicateKey`] and leaves the stored value untouched.
//! Reads of missing keys return `None`, never an error.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Error returned by rejected [`Registry`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The key is already present; write-once keys cannot be overwritten.
    DuplicateKey {
        /// The offending key
        key: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateKey { key } => {
                write!(f, "registry key '{key}' is already set and cannot be overwritten")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Per-request context: a string-keyed map of opaque JSON values.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: HashMap<String, Value>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] if the key is already present.
    /// The stored value is left unchanged in that case.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Result<(), RegistryError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateKey { key });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Look up `key`. Missing keys yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Remove `key`, returning the stored value if there was one.
    ///
    /// Removing a key frees it for a subsequent `set`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
