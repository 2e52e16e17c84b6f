//! Core module - engine configuration
//!
//! - [`Config`] - data directory and logging settings

pub mod config;

pub use config::Config;
