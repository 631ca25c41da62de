//! Single-lock in-memory store
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - One parking_lot RwLock guards the whole map
//! - get(): shared lock, any number of concurrent readers
//! - create()/update()/delete(): exclusive lock held across the existence
//!   check AND the mutation, so no other operation can observe or change the
//!   key in between
//!
//! Public operations take the lock exactly once and delegate to the `*_in`
//! helpers, which work on an already-locked map. Helpers never lock, and
//! public operations never call each other while holding a guard.
//!
//! parking_lot locks do not poison: a caller that panics while holding the
//! guard releases it and the map stays usable.

use memkv_core::{Error, KeyValueStore, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Display};
use std::hash::Hash;
use tracing::{debug, trace};

/// Name used when the caller does not pick one
pub const DEFAULT_STORE_NAME: &str = "default";

/// Generic key-value store behind one reader/writer lock
///
/// # Thread Safety
///
/// All operations are thread-safe. Share the store across threads with
/// `Arc<RwLockStore<K, V>>`.
///
/// # Example
///
/// ```
/// use memkv_storage::RwLockStore;
///
/// let store: RwLockStore<String, i64> = RwLockStore::new();
/// store.create("a".to_string(), 1).unwrap();
/// assert_eq!(store.get(&"a".to_string()).unwrap(), 1);
/// assert!(store.create("a".to_string(), 2).unwrap_err().is_already_exists());
/// ```
pub struct RwLockStore<K, V> {
    /// Label attached to every tracing event
    name: String,
    data: RwLock<FxHashMap<K, V>>,
}

impl<K, V> RwLockStore<K, V>
where
    K: Eq + Hash + Display,
    V: Clone,
{
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            data: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Set the label used in tracing events
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The label used in tracing events
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the value for `key`
    ///
    /// Takes the shared lock. The value is cloned out; the caller never holds
    /// a reference into the map.
    pub fn get(&self, key: &K) -> Result<V> {
        let result = {
            let data = self.data.read();
            Self::get_in(&data, key).cloned()
        };
        result.map_err(|e| self.rejected("get", e))
    }

    /// Insert `value` under `key` if `key` is absent
    pub fn create(&self, key: K, value: V) -> Result<()> {
        trace!(store = %self.name, key = %key, "create");
        let result = {
            let mut data = self.data.write();
            Self::create_in(&mut data, key, value)
        };
        result.map_err(|e| self.rejected("create", e))
    }

    /// Overwrite the value under `key` if `key` is present
    pub fn update(&self, key: K, value: V) -> Result<()> {
        trace!(store = %self.name, key = %key, "update");
        let result = {
            let mut data = self.data.write();
            Self::update_in(&mut data, key, value)
        };
        result.map_err(|e| self.rejected("update", e))
    }

    /// Remove `key` if it is present
    pub fn delete(&self, key: &K) -> Result<()> {
        trace!(store = %self.name, key = %key, "delete");
        let result = {
            let mut data = self.data.write();
            Self::delete_in(&mut data, key)
        };
        result.map_err(|e| self.rejected("delete", e))
    }

    /// Read the value for `key`, `None` if absent
    pub fn lookup(&self, key: &K) -> Option<V> {
        self.data.read().get(key).cloned()
    }

    /// Check whether `key` has an entry
    pub fn contains(&self, key: &K) -> bool {
        self.data.read().contains_key(key)
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.data.write().clear();
        trace!(store = %self.name, "clear");
    }

    /// Snapshot of the current keys, in no particular order
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.data.read().keys().cloned().collect()
    }

    // ========================================================================
    // Unlocked helpers: caller holds the appropriate guard
    // ========================================================================

    fn get_in<'a>(data: &'a FxHashMap<K, V>, key: &K) -> Result<&'a V> {
        data.get(key).ok_or_else(|| Error::not_found(key))
    }

    fn create_in(data: &mut FxHashMap<K, V>, key: K, value: V) -> Result<()> {
        match data.entry(key) {
            Entry::Occupied(entry) => Err(Error::already_exists(entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    fn update_in(data: &mut FxHashMap<K, V>, key: K, value: V) -> Result<()> {
        match data.get_mut(&key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::not_found(&key)),
        }
    }

    fn delete_in(data: &mut FxHashMap<K, V>, key: &K) -> Result<()> {
        data.remove(key).map(|_| ()).ok_or_else(|| Error::not_found(key))
    }

    fn rejected(&self, op: &'static str, error: Error) -> Error {
        debug!(store = %self.name, op, error = %error, "operation rejected");
        error
    }
}

impl<K, V> Default for RwLockStore<K, V>
where
    K: Eq + Hash + Display,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for RwLockStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RwLockStore")
            .field("name", &self.name)
            .field("len", &self.data.read().len())
            .finish()
    }
}

impl<K, V> KeyValueStore for RwLockStore<K, V>
where
    K: Eq + Hash + Display + Send + Sync,
    V: Clone + Send + Sync,
{
    type Key = K;
    type Value = V;

    fn get(&self, key: &K) -> Result<V> {
        RwLockStore::get(self, key)
    }

    fn create(&self, key: K, value: V) -> Result<()> {
        RwLockStore::create(self, key, value)
    }

    fn update(&self, key: K, value: V) -> Result<()> {
        RwLockStore::update(self, key, value)
    }

    fn delete(&self, key: &K) -> Result<()> {
        RwLockStore::delete(self, key)
    }

    fn len(&self) -> usize {
        RwLockStore::len(self)
    }

    fn lookup(&self, key: &K) -> Result<Option<V>> {
        Ok(RwLockStore::lookup(self, key))
    }

    fn contains(&self, key: &K) -> Result<bool> {
        Ok(RwLockStore::contains(self, key))
    }

    fn is_empty(&self) -> bool {
        RwLockStore::is_empty(self)
    }
}
