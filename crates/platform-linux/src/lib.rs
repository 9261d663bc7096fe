//! FancyLock Linux Platform Integration
//!
//! Platform-specific collaborators for X11 desktops:
//! - **Display Topology:** `xrandr` output parsing into monitor rectangles
//! - **Process Runner:** blocking `std::process` execution of invocations
//! - **Tool Detection:** screenshot tool discovery with a per-run cache
//! - **Fonts:** default sans-serif font lookup through fontconfig/ImageMagick
//! - **Locale:** "enter password" text for the current `LANG`

pub mod display;
pub mod fonts;
pub mod locale;
pub mod process;
pub mod tools;

pub use display::*;
pub use process::SystemRunner;
