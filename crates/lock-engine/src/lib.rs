//! FancyLock Lock Engine
//!
//! Runs one lock: screenshot, effects, per-monitor overlays, locker.
//! The engine owns the temporary image for the whole run and deletes it on
//! every exit path.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     LockSession                       │
//! │                                                       │
//! │  screenshot ──► ┌───────────────┐                     │
//! │                 │ base effects  │──┐                  │
//! │                 └───────────────┘  │  join            │
//! │                 ┌───────────────┐  ├──► composite ──► locker
//! │                 │ xrandr+overlay│──┘                  │
//! │                 └───────────────┘                     │
//! │                                                       │
//! │  TempImage (fancylock_XXXXXX.png) dropped at the end  │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod locker;
pub mod resolve;
pub mod session;
pub mod temp_image;

pub use locker::LockerOutcome;
pub use resolve::{ConfigResolver, LockOptions};
pub use session::*;
pub use temp_image::TempImage;

use fancylock_common::config::AppConfig;
use fancylock_common::error::LockResult;
use fancylock_platform_core::CommandRunner;

/// Lock the screen once: create the temporary image, resolve the run
/// configuration, and drive the session to completion.
pub fn lock_screen(
    options: &LockOptions,
    app: &AppConfig,
    runner: &dyn CommandRunner,
) -> LockResult<LockReport> {
    let image = TempImage::create()?;
    let config = ConfigResolver::new(runner).resolve(options, app, image.path());
    let session = LockSession::new(config, image, runner, options.processing_mode())?;
    session.run()
}
