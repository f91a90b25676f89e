//! # Core Module
//!
//! Configuration, error taxonomy, and shared embed builders for the study bot.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add embeds module with shared response styling
//! - 1.0.0: Initial creation with config and errors modules

pub mod config;
pub mod embeds;
pub mod errors;

// Re-export commonly used items
pub use config::Config;
pub use errors::{CommandError, StoreError};
