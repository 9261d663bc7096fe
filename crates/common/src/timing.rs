//! Stage timing for the lock pipeline.

use std::time::Instant;

/// Measures how long one pipeline stage took and reports it through
/// tracing when the stage finishes.
#[derive(Debug)]
pub struct StageTimer {
    stage: &'static str,
    started: Instant,
}

impl StageTimer {
    /// Start timing the named stage.
    pub fn start(stage: &'static str) -> Self {
        Self {
            stage,
            started: Instant::now(),
        }
    }

    /// Stage name.
    pub fn stage(&self) -> &'static str {
        self.stage
    }

    /// Milliseconds elapsed since the stage started.
    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }

    /// Log completion of the stage and return the elapsed milliseconds.
    pub fn finish(self) -> u128 {
        let elapsed_ms = self.elapsed_ms();
        tracing::info!(stage = self.stage, elapsed_ms, "Stage complete");
        elapsed_ms
    }
}
