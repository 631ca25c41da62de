//! Store configuration.
//!
//! [`StoreOptions`] can be built in code with builder-style setters or loaded
//! from TOML:
//!
//! ```toml
//! name = "sessions"
//! initial_capacity = 1024
//! ```
//!
//! Every field has a default, so an empty document is a valid config.

use crate::dynamic::DynamicStore;
use crate::error::ConfigError;
use memkv_storage::store::DEFAULT_STORE_NAME;
use memkv_storage::RwLockStore;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;
use tracing::debug;

/// Options for opening a store.
///
/// ```
/// use memkv::StoreOptions;
///
/// let opts = StoreOptions::new().name("sessions").initial_capacity(64);
/// let store = opts.open::<String, String>();
/// assert_eq!(store.name(), "sessions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Label attached to the store's tracing events
    pub name: String,
    /// Number of entries to pre-allocate
    pub initial_capacity: usize,
}

impl StoreOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the pre-allocated capacity.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let options: StoreOptions = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Read and parse options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading store options");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Open a typed store with these options.
    pub fn open<K, V>(&self) -> RwLockStore<K, V>
    where
        K: Eq + Hash + Display,
        V: Clone,
    {
        RwLockStore::with_capacity(self.initial_capacity).named(self.name.clone())
    }

    /// Open a dynamic store with these options.
    pub fn open_dynamic(&self) -> DynamicStore {
        DynamicStore::from_inner(self.open())
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            initial_capacity: 0,
        }
    }
}
