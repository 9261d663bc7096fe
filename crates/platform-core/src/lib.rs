//! FancyLock platform core contracts.
//!
//! This crate contains the display and process data structures shared by
//! the composer, the Linux collaborators, and the pipeline without coupling
//! them to a concrete process-spawning backend.

pub mod process;

pub use process::*;

/// One active monitor in the virtual desktop, as reported by the display
/// topology query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorRect {
    /// Resolution in physical pixels.
    pub width: u32,
    pub height: u32,
    /// Position in the virtual desktop (pixels).
    pub x_offset: u32,
    pub y_offset: u32,
}

impl MonitorRect {
    pub fn new(width: u32, height: u32, x_offset: u32, y_offset: u32) -> Self {
        Self {
            width,
            height,
            x_offset,
            y_offset,
        }
    }

    /// Centre of the monitor in virtual-desktop pixels, truncating odd sizes.
    pub fn center(&self) -> Point {
        Point {
            x: i64::from(self.width / 2) + i64::from(self.x_offset),
            y: i64::from(self.height / 2) + i64::from(self.y_offset),
        }
    }
}

/// A pixel position in the virtual desktop. Signed because overlay anchors
/// on very small monitors can land left of or above the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// ImageMagick offset notation, e.g. `+930+510`.
    pub fn to_offset(&self) -> String {
        format!("+{}+{}", self.x, self.y)
    }
}
