//! Catalog module - the store state manager and its errors
//!
//! # Contents
//!
//! - [`StoreManager`] - in-memory collections + snapshot-per-mutation persistence
//! - [`CatalogError`] - catalog error type

pub mod error;
pub mod manager;

pub use error::{CatalogError, CatalogResult};
pub use manager::StoreManager;
