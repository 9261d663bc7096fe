//! FancyLock Compose — overlay geometry and command composition
//!
//! Turns monitor rectangles and the run configuration into the image-tool
//! invocations that produce the lock screen:
//! - **Geometry:** Lock icon and prompt placement, centred per monitor
//! - **Presets:** Fixed colour and blur/pixelate parameter sets
//! - **Compose:** Base transform and overlay composite invocations
//!
//! This crate is pure computation — no I/O, no process spawning.
//! All inputs are data; all outputs are data.

pub mod compose;
pub mod geometry;
pub mod presets;
pub mod run_config;

pub use compose::{base_transform, folded_transform, overlay_composite};
pub use geometry::{compute_overlays, OverlayInstruction};
pub use run_config::RunConfig;
