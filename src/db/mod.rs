//! Database Module
//!
//! Embedded redb storage, the persisted data models and the seed datasets.

pub mod models;
pub mod seed;
pub mod storage;

pub use storage::{SnapshotStorage, StorageError, StorageResult};
pub use storage::{CATEGORIES_KEY, PRODUCTS_KEY, STORE_CONFIG_KEY};
