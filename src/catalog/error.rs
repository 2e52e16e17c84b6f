//! Catalog error types

use thiserror::Error;

use crate::db::StorageError;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
