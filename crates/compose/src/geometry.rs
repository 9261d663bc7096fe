//! Per-monitor overlay placement.
//!
//! The lock icon is centred on each monitor and the prompt text is
//! anchored below it. All arithmetic is integer with truncating division,
//! so the output matches pixel-for-pixel across runs.

use fancylock_platform_core::{MonitorRect, Point};

/// Side of the square lock icon, in pixels.
pub const ICON_SIZE: u32 = 60;

/// Vertical distance from the monitor centre down to the text anchor.
pub const TEXT_OFFSET_Y: i64 = 160;

/// Horizontal distance from the monitor centre left to the text anchor.
pub const TEXT_OFFSET_X: i64 = 142;

/// One icon + prompt annotation for one monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInstruction {
    /// Top-left corner of the lock icon.
    pub icon_position: Point,
    /// Anchor of the prompt text.
    pub text_position: Point,
    pub icon_size: u32,
    pub text: String,
    pub font: String,
}

impl OverlayInstruction {
    /// Place the icon and prompt on `monitor`.
    pub fn for_monitor(monitor: &MonitorRect, font: &str, text: &str) -> Self {
        let center = monitor.center();
        let half_icon = i64::from(ICON_SIZE / 2);

        Self {
            icon_position: Point::new(center.x - half_icon, center.y - half_icon),
            text_position: Point::new(center.x - TEXT_OFFSET_X, center.y + TEXT_OFFSET_Y),
            icon_size: ICON_SIZE,
            text: text.to_string(),
            font: font.to_string(),
        }
    }
}

/// One overlay per monitor, in topology order.
pub fn compute_overlays(monitors: &[MonitorRect], font: &str, text: &str) -> Vec<OverlayInstruction> {
    monitors
        .iter()
        .map(|monitor| OverlayInstruction::for_monitor(monitor, font, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hd_primary_placement() {
        let overlay =
            OverlayInstruction::for_monitor(&MonitorRect::new(1920, 1080, 0, 0), "DejaVu-Sans", "x");
        assert_eq!(overlay.icon_position, Point::new(930, 510));
        assert_eq!(overlay.text_position, Point::new(818, 700));
        assert_eq!(overlay.icon_size, 60);
    }

    #[test]
    fn offset_secondary_placement() {
        let overlay = OverlayInstruction::for_monitor(
            &MonitorRect::new(1280, 1024, 1920, 0),
            "DejaVu-Sans",
            "x",
        );
        // 1280/2 + 1920 = 2560, 1024/2 = 512
        assert_eq!(overlay.icon_position, Point::new(2530, 482));
        assert_eq!(overlay.text_position, Point::new(2418, 672));
    }

    #[test]
    fn odd_sizes_truncate_before_offsetting() {
        let overlay =
            OverlayInstruction::for_monitor(&MonitorRect::new(1365, 767, 7, 3), "F", "t");
        // 1365/2 = 682, 767/2 = 383
        assert_eq!(overlay.icon_position, Point::new(682 + 7 - 30, 383 + 3 - 30));
        assert_eq!(overlay.text_position, Point::new(682 + 7 - 142, 383 + 3 + 160));
    }

    #[test]
    fn tiny_monitor_text_anchor_goes_negative() {
        let overlay = OverlayInstruction::for_monitor(&MonitorRect::new(200, 100, 0, 0), "F", "t");
        assert_eq!(overlay.text_position, Point::new(-42, 210));
    }

    #[test]
    fn overlays_follow_input_order_and_carry_style() {
        let monitors = [
            MonitorRect::new(1280, 1024, 1920, 0),
            MonitorRect::new(1920, 1080, 0, 0),
        ];
        let overlays = compute_overlays(&monitors, "Noto-Sans", "Podaj hasło");
        assert_eq!(overlays.len(), 2);
        assert_eq!(overlays[0].icon_position, Point::new(2530, 482));
        assert_eq!(overlays[1].icon_position, Point::new(930, 510));
        assert!(overlays
            .iter()
            .all(|o| o.font == "Noto-Sans" && o.text == "Podaj hasło"));
    }

    #[test]
    fn no_monitors_no_overlays() {
        assert!(compute_overlays(&[], "F", "t").is_empty());
    }
}
