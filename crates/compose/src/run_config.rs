//! Per-run configuration.

use std::path::PathBuf;

use fancylock_platform_core::{Invocation, MonitorRect};

use crate::geometry::{compute_overlays, OverlayInstruction};
use crate::presets::{ColorPreset, FilterPreset};

/// Everything one lock run needs, resolved once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub greyscale: bool,
    pub pixelate: bool,

    /// ImageMagick font name for the prompt.
    pub font: String,

    /// Localized "enter password" prompt.
    pub text: String,

    /// Command that writes the screenshot to `image_path`.
    pub screenshot: Invocation,

    /// The run's temporary image. Never changes once set.
    pub image_path: PathBuf,

    /// Lock icon composited on each monitor.
    pub icon_path: PathBuf,

    /// Screen-locker program.
    pub locker: String,
}

impl RunConfig {
    pub fn color_preset(&self) -> ColorPreset {
        ColorPreset::from_greyscale(self.greyscale)
    }

    pub fn filter_preset(&self) -> FilterPreset {
        FilterPreset::from_pixelate(self.pixelate)
    }

    /// The image path as a command-line argument.
    pub fn image_arg(&self) -> String {
        self.image_path.to_string_lossy().into_owned()
    }

    /// Overlays for `monitors` using this run's font and prompt.
    pub fn overlays_for(&self, monitors: &[MonitorRect]) -> Vec<OverlayInstruction> {
        compute_overlays(monitors, &self.font, &self.text)
    }
}
