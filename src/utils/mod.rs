//! Utility modules: on-disk persistence and key-value storage.

pub mod persistence;
pub mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};
