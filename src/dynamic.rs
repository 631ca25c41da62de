//! Value-keyed store for untyped callers.
//!
//! [`DynamicStore`] accepts any [`Value`] as a key at its boundary and
//! performs the comparability check before touching the map. Keys that are
//! not usable as map keys (objects, NaN, arrays containing either) fail with
//! `KeyNotComparable` and the inner store is never locked.

use memkv_core::{Error, Key, KeyValueStore, Result, Value};
use memkv_storage::RwLockStore;
use tracing::debug;

/// Key-value store with dynamic keys and values.
///
/// # Example
///
/// ```
/// use memkv::prelude::*;
/// use std::collections::HashMap;
///
/// let store = DynamicStore::new();
/// store.create(Value::from("a"), Value::from("1")).unwrap();
/// assert_eq!(store.get(&Value::from("a")).unwrap(), Value::from("1"));
///
/// let bad_key = Value::Object(HashMap::new());
/// assert!(store.get(&bad_key).unwrap_err().is_not_comparable());
/// ```
#[derive(Debug, Default)]
pub struct DynamicStore {
    inner: RwLockStore<Key, Value>,
}

impl DynamicStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::from_inner(RwLockStore::new())
    }

    /// Create a store with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_inner(RwLockStore::with_capacity(capacity))
    }

    pub(crate) fn from_inner(inner: RwLockStore<Key, Value>) -> Self {
        Self { inner }
    }

    /// The label used in tracing events.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Read the value for `key`.
    pub fn get(&self, key: &Value) -> Result<Value> {
        let key = self.key_for("get", key)?;
        self.inner.get(&key)
    }

    /// Insert `value` under an absent `key`.
    pub fn create(&self, key: Value, value: Value) -> Result<()> {
        let key = self.key_for("create", &key)?;
        self.inner.create(key, value)
    }

    /// Overwrite the value under a present `key`.
    pub fn update(&self, key: Value, value: Value) -> Result<()> {
        let key = self.key_for("update", &key)?;
        self.inner.update(key, value)
    }

    /// Remove a present `key`.
    pub fn delete(&self, key: &Value) -> Result<()> {
        let key = self.key_for("delete", key)?;
        self.inner.delete(&key)
    }

    /// Read the value for `key`, `Ok(None)` if absent.
    pub fn lookup(&self, key: &Value) -> Result<Option<Value>> {
        let key = self.key_for("lookup", key)?;
        Ok(self.inner.lookup(&key))
    }

    /// Check whether `key` has an entry.
    pub fn contains(&self, key: &Value) -> Result<bool> {
        let key = self.key_for("contains", key)?;
        Ok(self.inner.contains(&key))
    }

    /// Get number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.inner.clear()
    }

    /// Snapshot of the current keys as values, in no particular order.
    pub fn keys(&self) -> Vec<Value> {
        self.inner.keys().into_iter().map(Value::from).collect()
    }

    fn key_for(&self, op: &'static str, key: &Value) -> Result<Key> {
        Key::try_from(key).map_err(|e: Error| {
            debug!(store = %self.inner.name(), op, error = %e, "operation rejected");
            e
        })
    }
}

impl KeyValueStore for DynamicStore {
    type Key = Value;
    type Value = Value;

    fn get(&self, key: &Value) -> Result<Value> {
        DynamicStore::get(self, key)
    }

    fn create(&self, key: Value, value: Value) -> Result<()> {
        DynamicStore::create(self, key, value)
    }

    fn update(&self, key: Value, value: Value) -> Result<()> {
        DynamicStore::update(self, key, value)
    }

    fn delete(&self, key: &Value) -> Result<()> {
        DynamicStore::delete(self, key)
    }

    fn len(&self) -> usize {
        DynamicStore::len(self)
    }

    fn lookup(&self, key: &Value) -> Result<Option<Value>> {
        DynamicStore::lookup(self, key)
    }

    fn contains(&self, key: &Value) -> Result<bool> {
        DynamicStore::contains(self, key)
    }

    fn is_empty(&self) -> bool {
        DynamicStore::is_empty(self)
    }
}
