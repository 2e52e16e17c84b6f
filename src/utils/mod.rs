//! Utility module - shared helpers
//!
//! # Contents
//!
//! - [`slugify`] - display-name to URL-safe slug derivation
//! - logger setup helpers

pub mod logger;
pub mod slug;

pub use logger::{init_logger, init_logger_with_file};
pub use slug::slugify;
