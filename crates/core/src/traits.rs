//! The store trait
//!
//! [`KeyValueStore`] is the surface callers program against. It says nothing
//! about locking; implementations decide how the check-and-act sequences of
//! `create`, `update` and `delete` are made atomic.

use crate::error::Result;

/// CRUD access to a key-value mapping.
///
/// # Contract
///
/// - `get` never mutates.
/// - `create` succeeds only if the key is absent; otherwise `KeyAlreadyExists`.
/// - `update` and `delete` succeed only if the key is present; otherwise `KeyNotFound`.
/// - Any operation may fail with `KeyNotComparable` if the implementation
///   accepts keys that are not usable as map keys.
/// - A failing call leaves the store unchanged.
///
/// The existence check and the mutation of `create`, `update` and `delete`
/// must be a single atomic step with respect to every other operation.
///
/// The trait is object safe, so callers can hold an
/// `Arc<dyn KeyValueStore<Key = K, Value = V>>`.
pub trait KeyValueStore: Send + Sync {
    /// Key type accepted at the boundary
    type Key;
    /// Stored value type
    type Value;

    /// Read the value for `key`, or fail with `KeyNotFound`.
    fn get(&self, key: &Self::Key) -> Result<Self::Value>;

    /// Insert `value` under an absent `key`.
    fn create(&self, key: Self::Key, value: Self::Value) -> Result<()>;

    /// Overwrite the value under a present `key`.
    fn update(&self, key: Self::Key, value: Self::Value) -> Result<()>;

    /// Remove a present `key`.
    fn delete(&self, key: &Self::Key) -> Result<()>;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Read the value for `key`, mapping `KeyNotFound` to `None`.
    ///
    /// Other errors still propagate.
    fn lookup(&self, key: &Self::Key) -> Result<Option<Self::Value>> {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check whether `key` has an entry.
    fn contains(&self, key: &Self::Key) -> Result<bool> {
        Ok(self.lookup(key)?.is_some())
    }

    /// Check whether the store has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
