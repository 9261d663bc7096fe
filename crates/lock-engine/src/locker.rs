//! Screen-locker invocation with a minimal fallback.

use fancylock_compose::RunConfig;
use fancylock_platform_core::{CommandRunner, Invocation};

/// Cosmetic i3lock options for the styled invocation.
const STYLE_ARGS: &[&str] = &[
    "-n",
    "--textcolor=ffffff00",
    "--insidecolor=ffffff1c",
    "--ringcolor=ffffff3e",
    "--linecolor=ffffff00",
    "--keyhlcolor=00000080",
    "--ringvercolor=00000000",
    "--separatorcolor=22222260",
    "--insidevercolor=0000001c",
    "--ringwrongcolor=00000055",
    "--insidewrongcolor=0000001c",
];

/// How the locker run ended. Never fatal to the overall run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockerOutcome {
    /// The styled invocation succeeded.
    Styled,
    /// The styled invocation failed and the minimal one succeeded.
    Fallback,
    /// Both invocations failed.
    FallbackFailed,
}

/// Styled locker call with its output discarded.
pub fn styled_locker(config: &RunConfig) -> Invocation {
    Invocation::new(config.locker.clone())
        .args(STYLE_ARGS.iter().copied())
        .arg("-i")
        .arg(config.image_arg())
        .quiet()
}

/// Minimal locker call that any i3lock build understands.
pub fn fallback_locker(config: &RunConfig) -> Invocation {
    Invocation::new(config.locker.clone())
        .arg("-ne")
        .arg("-i")
        .arg(config.image_arg())
}

/// Lock with the styled invocation, retrying once in minimal form.
pub fn invoke_locker(runner: &dyn CommandRunner, config: &RunConfig) -> LockerOutcome {
    let styled = styled_locker(config);
    if succeeded(runner, &styled) {
        return LockerOutcome::Styled;
    }

    tracing::warn!(locker = %config.locker, "Styled locker failed; retrying with minimal options");
    let fallback = fallback_locker(config);
    if succeeded(runner, &fallback) {
        LockerOutcome::Fallback
    } else {
        tracing::warn!(command = %fallback, "Fallback locker failed");
        LockerOutcome::FallbackFailed
    }
}

fn succeeded(runner: &dyn CommandRunner, invocation: &Invocation) -> bool {
    match runner.run(invocation) {
        Ok(status) => {
            if !status.success() {
                tracing::debug!(command = %invocation, %status, "Locker exited unsuccessfully");
            }
            status.success()
        }
        Err(e) => {
            tracing::debug!(command = %invocation, "Failed to start locker: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fancylock_platform_core::RunStatus;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct LockerStub {
        styled_ok: bool,
        fallback_ok: bool,
        calls: Mutex<Vec<Invocation>>,
    }

    impl CommandRunner for LockerStub {
        fn run(&self, invocation: &Invocation) -> std::io::Result<RunStatus> {
            self.calls.lock().unwrap().push(invocation.clone());
            let ok = if invocation.args.iter().any(|a| a == "-ne") {
                self.fallback_ok
            } else {
                self.styled_ok
            };
            Ok(RunStatus::from_code(if ok { 0 } else { 1 }))
        }

        fn capture(&self, _: &Invocation) -> std::io::Result<String> {
            Ok(String::new())
        }
    }

    fn stub(styled_ok: bool, fallback_ok: bool) -> LockerStub {
        LockerStub {
            styled_ok,
            fallback_ok,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn config() -> RunConfig {
        RunConfig {
            greyscale: false,
            pixelate: false,
            font: "DejaVu-Sans".to_string(),
            text: "Type password to unlock".to_string(),
            screenshot: Invocation::new("maim").arg("/tmp/fancylock_l.png"),
            image_path: PathBuf::from("/tmp/fancylock_l.png"),
            icon_path: PathBuf::from("/usr/share/fancylock/icons/lock.png"),
            locker: "i3lock".to_string(),
        }
    }

    #[test]
    fn styled_success_needs_one_call() {
        let runner = stub(true, true);
        assert_eq!(invoke_locker(&runner, &config()), LockerOutcome::Styled);

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].quiet);
        assert!(calls[0].args.ends_with(&["-i".to_string(), "/tmp/fancylock_l.png".to_string()]));
    }

    #[test]
    fn styled_failure_falls_back_once_with_same_image() {
        let runner = stub(false, true);
        assert_eq!(invoke_locker(&runner, &config()), LockerOutcome::Fallback);

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].args, vec!["-ne", "-i", "/tmp/fancylock_l.png"]);
    }

    #[test]
    fn fallback_failure_is_reported_not_retried() {
        let runner = stub(false, false);
        assert_eq!(invoke_locker(&runner, &config()), LockerOutcome::FallbackFailed);
        assert_eq!(runner.calls.lock().unwrap().len(), 2);
    }
}
