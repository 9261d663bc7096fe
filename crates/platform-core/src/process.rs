//! External-process contracts.
//!
//! Every external tool (screenshot grabber, `xrandr`, `convert`, the
//! locker) is described as an [`Invocation`] and executed through a
//! [`CommandRunner`], so the pipeline can be driven by a scripted runner in
//! tests.

use std::fmt;

/// A single external program call: program name plus argv, no shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Discard the program's stdout and stderr.
    pub quiet: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            quiet: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Program followed by its arguments.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }

    /// Whether any token contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.tokens().any(|token| token.contains(needle))
    }

    /// Shell-quoted command line, for logs and diagnostics.
    pub fn command_line(&self) -> String {
        shlex::try_join(self.tokens())
            .unwrap_or_else(|_| self.tokens().collect::<Vec<_>>().join(" "))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Exit status of a finished invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl RunStatus {
    pub const SUCCESS: RunStatus = RunStatus { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}

impl From<std::process::ExitStatus> for RunStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Executes invocations to completion. Implementations block until the
/// child exits; nothing is cancellable mid-flight.
pub trait CommandRunner: Send + Sync {
    /// Run the invocation and wait for it to exit.
    fn run(&self, invocation: &Invocation) -> std::io::Result<RunStatus>;

    /// Run the invocation and return its stdout with one trailing newline
    /// removed. A non-zero exit yields whatever the program printed.
    fn capture(&self, invocation: &Invocation) -> std::io::Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_quotes_tokens_with_spaces() {
        let inv = Invocation::new("convert")
            .arg("/tmp/a b.png")
            .args(["-annotate", "+1+2", "Type password to unlock"]);
        let line = inv.command_line();
        assert!(line.starts_with("convert "));
        let reparsed = shlex::split(&line).unwrap();
        assert_eq!(
            reparsed,
            vec![
                "convert",
                "/tmp/a b.png",
                "-annotate",
                "+1+2",
                "Type password to unlock"
            ]
        );
    }

    #[test]
    fn mentions_matches_program_and_arguments() {
        let inv = Invocation::new("maim").arg("/tmp/fancylock_x.png");
        assert!(inv.mentions("maim"));
        assert!(inv.mentions("fancylock_x"));
        assert!(!inv.mentions("scrot"));
    }

    #[test]
    fn signal_termination_is_not_success() {
        assert!(RunStatus::SUCCESS.success());
        assert!(!RunStatus::from_code(1).success());
        assert!(!RunStatus { code: None }.success());
        assert_eq!(RunStatus { code: None }.to_string(), "terminated by signal");
    }
}
