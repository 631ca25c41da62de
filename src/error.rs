//! Error types for memkv.
//!
//! Store operations fail with [`Error`] (re-exported from `memkv-core`).
//! Loading [`StoreOptions`](crate::StoreOptions) fails with [`ConfigError`];
//! the two never mix, so a store error is always one of the three key kinds.

use thiserror::Error;

pub use memkv_core::error::{Error, Result};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid TOML for [`StoreOptions`](crate::StoreOptions)
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but a field is out of range
    #[error("invalid option {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
