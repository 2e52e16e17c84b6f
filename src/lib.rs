//! Vitrine - local-first storefront catalog engine
//!
//! Owns the catalog state of a small online store — products, categories,
//! the singleton store configuration and seeded orders — and mirrors every
//! mutation to an embedded key-value snapshot store (redb). The presentation
//! layer constructs one [`StoreManager`] at process entry and passes it down
//! by reference.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # configuration
//! ├── catalog/       # StoreManager, catalog errors
//! ├── db/            # redb snapshot storage, models, seed data
//! └── utils/         # slug derivation, logging setup
//! ```
//!
//! # Example
//!
//! ```no_run
//! use vitrine::{Config, SnapshotStorage, StoreManager};
//! use vitrine::models::CategoryCreate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let storage = SnapshotStorage::open(config.db_path())?;
//! let mut manager = StoreManager::open(storage)?;
//!
//! let category = manager.add_category(CategoryCreate {
//!     name: "Sobremesas".to_string(),
//! })?;
//! assert_eq!(category.slug, "sobremesas");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use catalog::{CatalogError, CatalogResult, StoreManager};
pub use core::Config;
pub use db::models;
pub use db::{SnapshotStorage, StorageError, StorageResult};

// Re-export helper functions
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::slug::slugify;
