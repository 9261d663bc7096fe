//! Blocking process execution through `std::process`.

use std::process::{Command, Stdio};

use fancylock_platform_core::{CommandRunner, Invocation, RunStatus};

/// Runs invocations as real child processes, without a shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<RunStatus> {
        tracing::debug!(command = %invocation, "Running");
        let mut cmd = Self::command(invocation);
        if invocation.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        let status = cmd.status()?;
        Ok(status.into())
    }

    fn capture(&self, invocation: &Invocation) -> std::io::Result<String> {
        tracing::debug!(command = %invocation, "Capturing output");
        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        if !output.status.success() {
            tracing::debug!(
                command = %invocation,
                status = %RunStatus::from(output.status),
                "Command exited unsuccessfully"
            );
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }
}
