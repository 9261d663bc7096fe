//! Default font lookup.
//!
//! fontconfig names the default sans-serif family; ImageMagick's font
//! listing maps that family to the font name `convert -font` expects.

use fancylock_platform_core::{CommandRunner, Invocation};

/// Font used whenever detection fails.
pub const FALLBACK_FONT: &str = "DejaVu-Sans";

/// Detect the ImageMagick name of the default sans-serif font.
pub fn detect_default_font(runner: &dyn CommandRunner) -> String {
    match lookup_default_font(runner) {
        Some(font) => {
            tracing::debug!(font = %font, "Detected default font");
            font
        }
        None => {
            tracing::debug!("Font detection failed; using {}", FALLBACK_FONT);
            FALLBACK_FONT.to_string()
        }
    }
}

fn lookup_default_font(runner: &dyn CommandRunner) -> Option<String> {
    let family_output = runner
        .capture(&Invocation::new("fc-match").args(["sans", "-f", "%{family}\n"]))
        .ok()?;
    let family = family_output.lines().next()?.trim();
    if family.is_empty() {
        return None;
    }

    let listing = runner
        .capture(&Invocation::new("convert").args(["-list", "font"]))
        .ok()?;
    font_for_family(&listing, family)
}

/// Find the `Font:` entry whose `family:` line names `family`.
pub fn font_for_family(listing: &str, family: &str) -> Option<String> {
    let target = format!("family: {family}");
    let mut previous: Option<&str> = None;

    for line in listing.lines() {
        if line.trim() == target {
            if let Some(name) = previous.and_then(font_name) {
                return Some(name);
            }
        }
        previous = Some(line);
    }
    None
}

fn font_name(line: &str) -> Option<String> {
    line.trim()
        .strip_prefix("Font:")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
