//! FancyLock Common Utilities
//!
//! Shared infrastructure for all FancyLock crates:
//! - Error types and result aliases
//! - Stage timing for the lock pipeline
//! - Tracing/logging initialization
//! - Configuration loading

pub mod config;
pub mod error;
pub mod logging;
pub mod timing;

pub use config::*;
pub use error::*;
pub use timing::*;
