//! Repository Layer - Core Traits
//!
//! Defines the storage contract the note repository is built on.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::error::StorageResult;

/// Synchronous string key-value store
///
/// Mirrors the shape of `window.localStorage`: a single writer, no
/// transactions, whole values replaced on write.
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
