//! Storage layer for memkv
//!
//! This crate implements the in-memory backend:
//! - RwLockStore: FxHashMap behind a single parking_lot RwLock
//! - Reads take the shared lock, every mutation holds the exclusive lock
//!   for its whole check-and-act sequence

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::RwLockStore;
