//! Error types shared across FancyLock crates.

use std::path::PathBuf;

/// Top-level error type for FancyLock operations.
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("Screenshot failed: {message}")]
    Screenshot { message: String },

    #[error("Screenshot not created: {path}")]
    ScreenshotMissing { path: PathBuf },

    #[error("Base effects failed: {message}")]
    Transform { message: String },

    #[error("Overlay composition failed: {message}")]
    Composite { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using LockError.
pub type LockResult<T> = Result<T, LockError>;

impl LockError {
    pub fn screenshot(msg: impl Into<String>) -> Self {
        Self::Screenshot {
            message: msg.into(),
        }
    }

    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform {
            message: msg.into(),
        }
    }

    pub fn composite(msg: impl Into<String>) -> Self {
        Self::Composite {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
