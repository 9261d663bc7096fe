//! Image-tool command composition.
//!
//! The composer is a pure function of the run configuration and the
//! ordered overlays: it never runs anything, it only decides which
//! `convert` invocations the pipeline should execute. Overlapped runs use
//! [`base_transform`] then [`overlay_composite`]; sequential runs use
//! [`folded_transform`].

use fancylock_platform_core::Invocation;

use crate::geometry::OverlayInstruction;
use crate::run_config::RunConfig;

/// ImageMagick program used for every transform.
pub const IMAGE_TOOL: &str = "convert";

/// Point size of the prompt text.
pub const TEXT_POINT_SIZE: u32 = 26;

/// `convert IMG <colour> <filter> IMG`
pub fn base_transform(config: &RunConfig) -> Invocation {
    let image = config.image_arg();
    Invocation::new(IMAGE_TOOL)
        .arg(image.clone())
        .args(config.color_preset().args().iter().copied())
        .args(config.filter_preset().args().iter().copied())
        .arg(image)
}

/// `convert IMG <fragments...> IMG`, or `None` without overlays.
pub fn overlay_composite(
    config: &RunConfig,
    overlays: &[OverlayInstruction],
) -> Option<Invocation> {
    if overlays.is_empty() {
        return None;
    }

    let image = config.image_arg();
    Some(
        Invocation::new(IMAGE_TOOL)
            .arg(image.clone())
            .args(overlay_fragments(config, overlays))
            .arg(image),
    )
}

/// Base transform and overlays folded into one invocation, for runs that
/// do not overlap the two stages.
pub fn folded_transform(config: &RunConfig, overlays: &[OverlayInstruction]) -> Invocation {
    let image = config.image_arg();
    Invocation::new(IMAGE_TOOL)
        .arg(image.clone())
        .args(config.color_preset().args().iter().copied())
        .args(config.filter_preset().args().iter().copied())
        .args(overlay_fragments(config, overlays))
        .arg(image)
}

fn overlay_fragments(config: &RunConfig, overlays: &[OverlayInstruction]) -> Vec<String> {
    let icon = config.icon_path.to_string_lossy();
    overlays
        .iter()
        .flat_map(|overlay| overlay_fragment(overlay, &icon))
        .collect()
}

/// Arguments drawing one monitor's prompt (stroked, then plain on top) and
/// compositing the lock icon.
pub fn overlay_fragment(overlay: &OverlayInstruction, icon_path: &str) -> Vec<String> {
    let text_at = overlay.text_position.to_offset();
    let icon_at = overlay.icon_position.to_offset();
    let point_size = TEXT_POINT_SIZE.to_string();
    let font = overlay.font.as_str();
    let text = overlay.text.as_str();

    [
        "-font",
        font,
        "-pointsize",
        point_size.as_str(),
        "-fill",
        "lightgrey",
        "-stroke",
        "grey10",
        "-strokewidth",
        "2",
        "-annotate",
        text_at.as_str(),
        text,
        "-fill",
        "lightgrey",
        "-stroke",
        "lightgrey",
        "-strokewidth",
        "1",
        "-annotate",
        text_at.as_str(),
        text,
        icon_path,
        "-geometry",
        icon_at.as_str(),
        "-composite",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
