//! # memkv
//!
//! Concurrency-safe, in-memory key-value store.
//!
//! memkv offers create/read/update/delete over a single map guarded by one
//! reader/writer lock. Every mutation checks key existence and acts inside
//! the same exclusive critical section, so two racing creates of the same
//! key can never both succeed.
//!
//! ## Quick Start
//!
//! ```
//! use memkv::prelude::*;
//!
//! let store: RwLockStore<String, String> = StoreOptions::new().name("users").open();
//!
//! store.create("user:1".to_string(), "Alice".to_string()).unwrap();
//! assert_eq!(store.get(&"user:1".to_string()).unwrap(), "Alice");
//!
//! store.update("user:1".to_string(), "Bob".to_string()).unwrap();
//! store.delete(&"user:1".to_string()).unwrap();
//! assert!(store.get(&"user:1".to_string()).unwrap_err().is_not_found());
//! ```
//!
//! ## Stores
//!
//! - [`RwLockStore`] - generic over `K: Eq + Hash`, for typed callers
//! - [`DynamicStore`] - [`Value`]-keyed, checks key comparability at runtime
//!
//! Both implement [`KeyValueStore`], so callers can stay independent of the
//! concrete store.
//!
//! ## Errors
//!
//! | Error | When |
//! |-------|------|
//! | `KeyNotFound` | get/update/delete on an absent key |
//! | `KeyAlreadyExists` | create on a present key |
//! | `KeyNotComparable` | key has no stable equality/hash (dynamic store only) |

#![warn(missing_docs)]

mod dynamic;
mod error;
mod options;

pub mod prelude;

pub use dynamic::DynamicStore;
pub use error::{ConfigError, Error, Result};
pub use options::StoreOptions;

pub use memkv_core::{Key, KeyValueStore, Value};
pub use memkv_storage::RwLockStore;
