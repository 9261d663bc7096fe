//! Lock session orchestration.
//!
//! A session walks a fixed sequence of states:
//!
//! `Start → ScreenshotCaptured → EffectsApplied → OverlaysComposited → LockerInvoked`
//!
//! Between the screenshot and the composite, the overlay computation
//! (which queries `xrandr`) may run on a second thread while `convert`
//! applies the base effects. Both branches are joined before compositing.

use fancylock_common::error::{LockError, LockResult};
use fancylock_common::timing::StageTimer;
use fancylock_compose::compose::{base_transform, folded_transform, overlay_composite};
use fancylock_compose::{OverlayInstruction, RunConfig};
use fancylock_platform_core::{CommandRunner, Invocation};
use fancylock_platform_linux::detect_monitors;

use crate::locker::{invoke_locker, LockerOutcome};
use crate::temp_image::TempImage;

/// Whether the effects and the overlay computation overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    /// Overlay computation on a second thread, joined before compositing.
    Parallel,
    /// Overlays first, then one folded `convert` call.
    Sequential,
}

impl ProcessingMode {
    /// Parallel unless sequential processing was requested or the host has
    /// a single processing unit.
    pub fn select(sequential_requested: bool) -> Self {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        if sequential_requested || cores <= 1 {
            Self::Sequential
        } else {
            Self::Parallel
        }
    }
}

/// State of a lock session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing has run yet.
    Start,
    /// The screenshot exists on disk.
    ScreenshotCaptured,
    /// Colour levels and blur/pixelate applied.
    EffectsApplied,
    /// Icons and prompts drawn (or there was nothing to draw).
    OverlaysComposited,
    /// The locker returned.
    LockerInvoked,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockReport {
    /// Monitors that received an overlay.
    pub monitors: usize,
    pub mode: ProcessingMode,
    pub locker: LockerOutcome,
}

/// One lock run. Owns the temporary image; it is deleted when the run
/// finishes, whatever the outcome.
pub struct LockSession<'a> {
    config: RunConfig,
    image: TempImage,
    runner: &'a dyn CommandRunner,
    mode: ProcessingMode,
    state: SessionState,
}

impl<'a> LockSession<'a> {
    /// Create a session. `config.image_path` must be the path of `image`.
    pub fn new(
        config: RunConfig,
        image: TempImage,
        runner: &'a dyn CommandRunner,
        mode: ProcessingMode,
    ) -> LockResult<Self> {
        if config.image_path != image.path() {
            return Err(LockError::config(format!(
                "Run image {} does not match temporary image {}",
                config.image_path.display(),
                image.path().display()
            )));
        }

        Ok(Self {
            config,
            image,
            runner,
            mode,
            state: SessionState::Start,
        })
    }

    /// Drive the session to completion and delete the temporary image.
    pub fn run(mut self) -> LockResult<LockReport> {
        let result = self.drive();
        if let Err(e) = &result {
            tracing::error!(state = ?self.state, "Lock run aborted: {}", e);
        }
        self.image.close();
        result
    }

    fn drive(&mut self) -> LockResult<LockReport> {
        self.capture_screenshot()?;
        self.state = SessionState::ScreenshotCaptured;

        let monitors = match self.mode {
            ProcessingMode::Parallel => self.process_parallel()?,
            ProcessingMode::Sequential => self.process_sequential()?,
        };

        let locker = invoke_locker(self.runner, &self.config);
        self.state = SessionState::LockerInvoked;

        Ok(LockReport {
            monitors,
            mode: self.mode,
            locker,
        })
    }

    fn capture_screenshot(&self) -> LockResult<()> {
        let timer = StageTimer::start("screenshot");
        run_step(self.runner, &self.config.screenshot, Step::Screenshot)?;

        if !self.image.has_content() {
            return Err(LockError::ScreenshotMissing {
                path: self.config.image_path.clone(),
            });
        }
        timer.finish();
        Ok(())
    }

    fn process_parallel(&mut self) -> LockResult<usize> {
        let timer = StageTimer::start("effects");
        let runner = self.runner;
        let config = &self.config;

        let (base, overlays) = std::thread::scope(|scope| {
            let overlay_task = scope.spawn(|| compute_run_overlays(runner, config));
            let base = run_step(runner, &base_transform(config), Step::Transform);
            (base, overlay_task.join())
        });
        base?;
        let overlays = overlays
            .map_err(|_| LockError::platform("Overlay computation thread panicked"))?;
        self.state = SessionState::EffectsApplied;

        match overlay_composite(&self.config, &overlays) {
            Some(composite) => run_step(self.runner, &composite, Step::Composite)?,
            None => tracing::debug!("No monitors detected; skipping overlay composite"),
        }
        self.state = SessionState::OverlaysComposited;

        timer.finish();
        Ok(overlays.len())
    }

    fn process_sequential(&mut self) -> LockResult<usize> {
        let timer = StageTimer::start("effects");
        let overlays = compute_run_overlays(self.runner, &self.config);

        run_step(
            self.runner,
            &folded_transform(&self.config, &overlays),
            Step::Transform,
        )?;
        self.state = SessionState::OverlaysComposited;

        timer.finish();
        Ok(overlays.len())
    }
}

fn compute_run_overlays(runner: &dyn CommandRunner, config: &RunConfig) -> Vec<OverlayInstruction> {
    config.overlays_for(&detect_monitors(runner))
}

/// Fatal pipeline steps.
#[derive(Debug, Clone, Copy)]
enum Step {
    Screenshot,
    Transform,
    Composite,
}

impl Step {
    fn failure(self, message: String) -> LockError {
        match self {
            Self::Screenshot => LockError::screenshot(message),
            Self::Transform => LockError::transform(message),
            Self::Composite => LockError::composite(message),
        }
    }
}

fn run_step(runner: &dyn CommandRunner, invocation: &Invocation, step: Step) -> LockResult<()> {
    tracing::debug!(?step, command = %invocation, "Running step");
    match runner.run(invocation) {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(step.failure(format!("{invocation} ({status})"))),
        Err(e) => Err(step.failure(format!("{}: {e}", invocation.program))),
    }
}
