//! Display topology detection.

use std::sync::OnceLock;

use fancylock_platform_core::{CommandRunner, Invocation, MonitorRect};
use regex::Regex;

/// Program queried for the monitor layout.
pub const TOPOLOGY_PROGRAM: &str = "xrandr";

fn geometry_regex() -> &'static Regex {
    static GEOMETRY: OnceLock<Regex> = OnceLock::new();
    GEOMETRY.get_or_init(|| {
        Regex::new(r"(\d+)x(\d+)\+(\d+)\+(\d+)").expect("geometry pattern is a valid regex")
    })
}

/// Parse `xrandr`-style output into monitor rectangles.
///
/// Every line containing `<w>x<h>+<x>+<y>` yields one monitor, in line
/// order. Other lines (screen header, mode lists, disconnected outputs) are
/// ignored, and a line whose numbers do not fit is skipped on its own.
pub fn parse_topology(text: &str) -> Vec<MonitorRect> {
    text.lines().filter_map(parse_geometry_line).collect()
}

fn parse_geometry_line(line: &str) -> Option<MonitorRect> {
    let caps = geometry_regex().captures(line)?;
    let field = |idx: usize| caps[idx].parse::<u32>();

    match (field(1), field(2), field(3), field(4)) {
        (Ok(width), Ok(height), Ok(x_offset), Ok(y_offset)) => {
            Some(MonitorRect::new(width, height, x_offset, y_offset))
        }
        _ => {
            tracing::debug!(line, "Skipping geometry line with out-of-range numbers");
            None
        }
    }
}

/// Query the current monitor layout.
///
/// A failing query is not fatal: it yields no monitors, and the lock image
/// is then produced without overlays.
pub fn detect_monitors(runner: &dyn CommandRunner) -> Vec<MonitorRect> {
    tracing::debug!("Detecting monitors");

    match runner.capture(&Invocation::new(TOPOLOGY_PROGRAM)) {
        Ok(output) => {
            let monitors = parse_topology(&output);
            tracing::debug!(count = monitors.len(), "Monitors detected");
            monitors
        }
        Err(e) => {
            tracing::warn!("Failed to query display topology: {}", e);
            Vec::new()
        }
    }
}

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Display server type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Unknown,
}
