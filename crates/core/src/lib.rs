//! Core types for memkv
//!
//! This crate defines the pieces every store implementation shares:
//! - [`Error`]: the three-kind error taxonomy (not found, already exists, not comparable)
//! - [`Value`]: the dynamic value model used at untyped boundaries
//! - [`Key`]: the hashable subset of [`Value`], produced by an explicit comparability check
//! - [`KeyValueStore`]: the CRUD trait callers program against

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use key::Key;
pub use traits::KeyValueStore;
pub use value::Value;
