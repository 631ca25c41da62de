//! Error types for memkv stores.
//!
//! Every store operation fails with exactly one of three kinds:
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | `KeyNotFound` | get, update, delete on an absent key |
//! | `KeyAlreadyExists` | create on a present key |
//! | `KeyNotComparable` | any operation given a key with no stable equality/hash |
//!
//! All three are recoverable. A store that returns one of them has not been
//! mutated by the failing call.

use std::fmt::Display;
use thiserror::Error;

/// Store errors.
///
/// Each variant carries the offending key rendered through its `Display`
/// impl. The rendered key is quoted in the message so that empty keys and
/// keys containing spaces stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No entry exists for the key
    #[error("key {key:?} not exist")]
    KeyNotFound {
        /// Display form of the key
        key: String,
    },

    /// An entry already exists for the key
    #[error("key {key:?} already exist")]
    KeyAlreadyExists {
        /// Display form of the key
        key: String,
    },

    /// The key cannot be used as a map key
    #[error("key {key:?} is not comparable")]
    KeyNotComparable {
        /// Display form of the key
        key: String,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `KeyNotFound` error for `key`.
    pub fn not_found(key: impl Display) -> Self {
        Error::KeyNotFound {
            key: key.to_string(),
        }
    }

    /// Build a `KeyAlreadyExists` error for `key`.
    pub fn already_exists(key: impl Display) -> Self {
        Error::KeyAlreadyExists {
            key: key.to_string(),
        }
    }

    /// Build a `KeyNotComparable` error for `key`.
    pub fn not_comparable(key: impl Display) -> Self {
        Error::KeyNotComparable {
            key: key.to_string(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// Check if this is an already-exists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::KeyAlreadyExists { .. })
    }

    /// Check if this is a not-comparable error.
    pub fn is_not_comparable(&self) -> bool {
        matches!(self, Error::KeyNotComparable { .. })
    }

    /// The rendered key carried by this error.
    pub fn key(&self) -> &str {
        match self {
            Error::KeyNotFound { key }
            | Error::KeyAlreadyExists { key }
            | Error::KeyNotComparable { key } => key,
        }
    }
}
