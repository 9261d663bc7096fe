//! Screenshot tool discovery.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use fancylock_platform_core::Invocation;

/// Screenshot tools in priority order, with the arguments that precede the
/// output path.
pub const SCREENSHOT_TOOLS: &[(&str, &[&str])] = &[
    ("maim", &[]),
    ("scrot", &["-z"]),
    ("import", &["-window", "root"]),
];

type Lookup = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Memoised "is this program on PATH" lookups, scoped to one run.
pub struct ToolCache {
    known: HashMap<String, bool>,
    lookup: Lookup,
}

impl ToolCache {
    /// Cache backed by `command -v` lookups.
    pub fn new() -> Self {
        Self::with_lookup(command_exists)
    }

    /// Cache backed by a custom existence check.
    pub fn with_lookup(lookup: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            known: HashMap::new(),
            lookup: Box::new(lookup),
        }
    }

    /// Whether `tool` is available, checking at most once per tool.
    pub fn exists(&mut self, tool: &str) -> bool {
        if let Some(&known) = self.known.get(tool) {
            return known;
        }
        let found = (self.lookup)(tool);
        tracing::debug!(tool, found, "Looked up tool");
        self.known.insert(tool.to_string(), found);
        found
    }
}

impl Default for ToolCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolCache")
            .field("known", &self.known)
            .finish_non_exhaustive()
    }
}

/// Pick the first installed screenshot tool and point it at `image_path`.
/// Falls back to ImageMagick's `import` when nothing is found.
pub fn detect_screenshot_command(cache: &mut ToolCache, image_path: &Path) -> Invocation {
    let target = image_path.to_string_lossy();
    let (tool, args) = SCREENSHOT_TOOLS
        .iter()
        .find(|(tool, _)| cache.exists(tool))
        .copied()
        .unwrap_or_else(|| {
            tracing::warn!("No screenshot tool found; falling back to import");
            SCREENSHOT_TOOLS[SCREENSHOT_TOOLS.len() - 1]
        });

    Invocation::new(tool)
        .args(args.iter().copied())
        .arg(target.into_owned())
}

/// Build a user-supplied screenshot command.
///
/// Returns `None` for an empty token list. A single token containing
/// whitespace is split shell-style. The image path is appended unless some
/// token already contains it.
pub fn custom_screenshot_command(tokens: &[String], image_path: &Path) -> Option<Invocation> {
    let words: Vec<String> = match tokens {
        [] => return None,
        [single] if single.contains(char::is_whitespace) => {
            shlex::split(single).unwrap_or_else(|| {
                tracing::warn!(command = %single, "Unbalanced quoting in screenshot command");
                single.split_whitespace().map(str::to_string).collect()
            })
        }
        _ => tokens.to_vec(),
    };

    let (program, args) = words.split_first()?;
    let mut invocation = Invocation::new(program.clone()).args(args.iter().cloned());

    let target = image_path.to_string_lossy();
    if !invocation.mentions(&target) {
        invocation = invocation.arg(target.into_owned());
    }
    Some(invocation)
}

fn command_exists(binary: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {binary} >/dev/null 2>&1"))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
