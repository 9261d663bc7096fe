//! Run-configuration resolution.
//!
//! Defaults are overridden by detected values (font, prompt language,
//! screenshot tool), then by the config file, then by command-line options.

use std::path::Path;

use fancylock_common::config::AppConfig;
use fancylock_compose::RunConfig;
use fancylock_platform_core::CommandRunner;
use fancylock_platform_linux::fonts::detect_default_font;
use fancylock_platform_linux::locale::localized_text;
use fancylock_platform_linux::tools::{
    custom_screenshot_command, detect_screenshot_command, ToolCache,
};
use fancylock_platform_linux::{detect_display_server, DisplayServer};

use crate::session::ProcessingMode;

/// User choices from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockOptions {
    pub greyscale: bool,
    pub pixelate: bool,
    /// Font override; an empty value is ignored.
    pub font: Option<String>,
    /// Disable overlapping the effects with overlay computation.
    pub sequential: bool,
    /// Custom screenshot command tokens (everything after `--`).
    pub screenshot_command: Vec<String>,
}

impl LockOptions {
    pub fn processing_mode(&self) -> ProcessingMode {
        ProcessingMode::select(self.sequential)
    }
}

/// Resolves a [`RunConfig`] for one run. Owns the run's tool cache.
pub struct ConfigResolver<'a> {
    runner: &'a dyn CommandRunner,
    tools: ToolCache,
    lang: Option<String>,
}

impl<'a> ConfigResolver<'a> {
    /// Resolver checking real tools and reading `LANG` from the environment.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            runner,
            tools: ToolCache::new(),
            lang: std::env::var("LANG").ok(),
        }
    }

    pub fn with_tools(mut self, tools: ToolCache) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_lang(mut self, lang: Option<String>) -> Self {
        self.lang = lang;
        self
    }

    pub fn resolve(
        &mut self,
        options: &LockOptions,
        app: &AppConfig,
        image_path: &Path,
    ) -> RunConfig {
        if detect_display_server() == DisplayServer::Wayland {
            tracing::warn!("Wayland session detected; xrandr and i3lock expect X11");
        }

        let font = match options.font.as_deref().filter(|font| !font.is_empty()) {
            Some(font) => font.to_string(),
            None => detect_default_font(self.runner),
        };

        let screenshot = custom_screenshot_command(&options.screenshot_command, image_path)
            .unwrap_or_else(|| detect_screenshot_command(&mut self.tools, image_path));

        let config = RunConfig {
            greyscale: options.greyscale,
            pixelate: options.pixelate,
            font,
            text: localized_text(self.lang.as_deref()).to_string(),
            screenshot,
            image_path: image_path.to_path_buf(),
            icon_path: app.icon_path.clone(),
            locker: app.locker.clone(),
        };

        tracing::debug!(
            font = %config.font,
            screenshot = %config.screenshot,
            greyscale = config.greyscale,
            pixelate = config.pixelate,
            "Resolved run configuration"
        );
        config
    }
}
