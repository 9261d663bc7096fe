//! FancyLock CLI — lock the screen behind a blurred screenshot.
//!
//! Usage:
//!   fancylock [OPTIONS] [-- SCREENSHOT_COMMAND...]
//!
//! Screenshot tools are auto-detected in the order maim > scrot > import.
//! Custom commands: `fancylock -- scrot -z` or `fancylock -- maim --format png`.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use fancylock_common::config::{AppConfig, LoggingConfig};
use fancylock_lock_engine::{lock_screen, LockOptions, LockerOutcome};
use fancylock_platform_linux::SystemRunner;

#[derive(Parser, Debug)]
#[command(
    name = "fancylock",
    about = "Lock the screen with a blurred screenshot, a lock icon, and a prompt on every monitor",
    version,
    after_help = "Auto-detected tools: maim > scrot > import\nCustom commands: -- scrot -z | -- maim --format png"
)]
struct Cli {
    /// Greyscale background
    #[arg(short, long)]
    greyscale: bool,

    /// Pixelate instead of blur (faster)
    #[arg(short, long)]
    pixelate: bool,

    /// Custom font
    #[arg(short, long, value_name = "FONT")]
    font: Option<String>,

    /// Use sequential processing
    #[arg(long)]
    sequential: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Screenshot command to run instead of the detected tool
    #[arg(last = true, value_name = "SCREENSHOT_COMMAND")]
    screenshot_command: Vec<String>,
}

impl Cli {
    fn lock_options(&self) -> LockOptions {
        LockOptions {
            greyscale: self.greyscale,
            pixelate: self.pixelate,
            font: self.font.clone(),
            sequential: self.sequential,
            screenshot_command: self.screenshot_command.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let app = AppConfig::load();

    let logging = if cli.verbose {
        LoggingConfig {
            level: "debug".to_string(),
            ..app.logging.clone()
        }
    } else {
        app.logging.clone()
    };
    fancylock_common::logging::init_logging(&logging);

    let report = lock_screen(&cli.lock_options(), &app, &SystemRunner::new())?;
    tracing::debug!(
        monitors = report.monitors,
        mode = ?report.mode,
        locker = ?report.locker,
        "Lock run finished"
    );

    if report.locker == LockerOutcome::FallbackFailed {
        eprintln!("Warning: {} could not be started", app.locker);
    }
    Ok(())
}
