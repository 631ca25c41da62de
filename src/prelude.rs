//! Convenient imports for memkv.
//!
//! ```
//! use memkv::prelude::*;
//!
//! let store = DynamicStore::new();
//! store.create(Value::Int(1), Value::from("one")).unwrap();
//! ```

// Stores
pub use crate::dynamic::DynamicStore;
pub use memkv_storage::RwLockStore;

// Configuration
pub use crate::options::StoreOptions;

// Error handling
pub use crate::error::{ConfigError, Error, Result};

// Core types
pub use memkv_core::{Key, KeyValueStore, Value};
