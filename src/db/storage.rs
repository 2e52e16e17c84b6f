//! redb-based snapshot storage
//!
//! # Layout
//!
//! One table, three fixed keys, whole-collection JSON values:
//!
//! | Key | Value |
//! |-----|-------|
//! | `store-products` | JSON array of `Product` |
//! | `store-categories` | JSON array of `Category` |
//! | `store-config` | JSON `StoreInfo` object |
//!
//! Every mutation rewrites the affected collection in full; there is no
//! incremental update path. N sequential mutations cause N snapshot writes.
//!
//! # Durability
//!
//! redb commits are durable when `commit()` returns and the database file is
//! always left in a consistent state (copy-on-write with atomic pointer
//! swap), so a crash mid-write loses at most the in-flight snapshot.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::models::{Category, Product, StoreInfo};

/// Table for collection snapshots: key = record name, value = JSON bytes
const SNAPSHOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("snapshots");

/// Record key for the serialized product collection
pub const PRODUCTS_KEY: &str = "store-products";
/// Record key for the serialized category collection
pub const CATEGORIES_KEY: &str = "store-categories";
/// Record key for the serialized store configuration singleton
pub const STORE_CONFIG_KEY: &str = "store-config";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Snapshot storage backed by redb
#[derive(Clone)]
pub struct SnapshotStorage {
    db: Arc<Database>,
}

impl SnapshotStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table so first reads don't fail on a fresh file
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SNAPSHOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SNAPSHOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Raw Record Access ==========

    /// Read the raw bytes stored under a key
    pub fn get_raw(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SNAPSHOTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    /// Overwrite the bytes stored under a key (committed before return)
    pub fn put_raw(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Typed Snapshots ==========

    fn load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.put_raw(key, &bytes)
    }

    /// Load the product collection; `None` when never persisted
    pub fn load_products(&self) -> StorageResult<Option<Vec<Product>>> {
        self.load(PRODUCTS_KEY)
    }

    /// Persist the full product collection
    pub fn save_products(&self, products: &[Product]) -> StorageResult<()> {
        self.save(PRODUCTS_KEY, &products)
    }

    /// Load the category collection; `None` when never persisted
    pub fn load_categories(&self) -> StorageResult<Option<Vec<Category>>> {
        self.load(CATEGORIES_KEY)
    }

    /// Persist the full category collection
    pub fn save_categories(&self, categories: &[Category]) -> StorageResult<()> {
        self.save(CATEGORIES_KEY, &categories)
    }

    /// Load the store configuration; `None` when never persisted
    pub fn load_store_info(&self) -> StorageResult<Option<StoreInfo>> {
        self.load(STORE_CONFIG_KEY)
    }

    /// Persist the store configuration
    pub fn save_store_info(&self, store: &StoreInfo) -> StorageResult<()> {
        self.save(STORE_CONFIG_KEY, store)
    }
}
