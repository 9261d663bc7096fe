//! The run's temporary lock image.

use std::path::Path;

use fancylock_common::error::LockResult;
use tempfile::TempPath;

/// An empty, randomly named PNG path in the temp directory that is removed
/// when the value is closed or dropped, whichever comes first.
#[derive(Debug)]
pub struct TempImage {
    path: TempPath,
}

impl TempImage {
    /// Create `fancylock_XXXXXX.png` in the system temp directory.
    pub fn create() -> LockResult<Self> {
        Self::create_in(&std::env::temp_dir())
    }

    /// Create `fancylock_XXXXXX.png` in `dir`.
    pub fn create_in(dir: &Path) -> LockResult<Self> {
        let file = tempfile::Builder::new()
            .prefix("fancylock_")
            .suffix(".png")
            .tempfile_in(dir)?;
        let path = file.into_temp_path();
        tracing::debug!(path = %path.display(), "Created temporary image");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a tool has written image data to the path.
    pub fn has_content(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false)
    }

    /// Delete the image now. Never fails; a file that is already gone is
    /// not an error.
    pub fn close(self) {
        let shown = self.path.display().to_string();
        match self.path.close() {
            Ok(()) => tracing::debug!(path = %shown, "Removed temporary image"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove temporary image {}: {}", shown, e),
        }
    }
}
