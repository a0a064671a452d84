// Press routing against the hit-regions of the last drawn frame.

use super::constants::TOUCH_MOUSE_DEDUP_MS;
use super::layout::HitRegions;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressAction {
    ToggleMuteLeft,
    ToggleMuteRight,
    ToggleMeasurement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressKind {
    Mouse,
    Touch,
}

/// First match wins: left mute, right mute, then start/stop.
///
/// The start/stop half stops short of the centre divider.
pub fn route_press(p: DVec2, regions: &HitRegions) -> Option<PressAction> {
    if regions.left_mute_button.is_some_and(|r| r.contains(p)) {
        return Some(PressAction::ToggleMuteLeft);
    }
    if regions.right_mute_button.is_some_and(|r| r.contains(p)) {
        return Some(PressAction::ToggleMuteRight);
    }
    if regions
        .start_stop
        .is_some_and(|r| r.contains(p) && p.x < r.x + r.w)
    {
        return Some(PressAction::ToggleMeasurement);
    }
    None
}

/// Drops the emulated mouse press browsers send right after a touch.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressFilter {
    last_touch_ms: Option<f64>,
}

impl PressFilter {
    /// Returns true when the press should be routed.
    pub fn accept(&mut self, kind: PressKind, now_ms: f64) -> bool {
        match kind {
            PressKind::Touch => {
                self.last_touch_ms = Some(now_ms);
                true
            }
            PressKind::Mouse => match self.last_touch_ms {
                Some(t) => now_ms - t > TOUCH_MOUSE_DEDUP_MS || now_ms < t,
                None => true,
            },
        }
    }
}
