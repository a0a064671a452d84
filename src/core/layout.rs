// Screen partitioning and the hit-regions published for input routing.

use super::constants::*;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Edges count as inside.
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// Press targets drawn in the last frame. Empty while the portrait guard shows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitRegions {
    pub left_mute_button: Option<Rect>,
    pub right_mute_button: Option<Rect>,
    pub start_stop: Option<Rect>,
}

/// Geometry of one landscape frame, derived from the viewport size only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub top_h: f64,
    pub bottom_h: f64,
    pub gauge_center: DVec2,
    pub gauge_radius: f64,
    pub face_center: DVec2,
    pub face_diameter: f64,
    pub left_banner: Rect,
    pub right_banner: Rect,
    pub left_mute_button: Rect,
    pub right_mute_button: Rect,
    pub start_stop: Rect,
    pub ppm_panel: Rect,
}

#[inline]
pub fn is_portrait(width: f64, height: f64) -> bool {
    height > width
}

impl Layout {
    pub fn compute(width: f64, height: f64) -> Self {
        let half = width / 2.0;
        let top_h = height * TOP_AREA_FRACTION;
        let bottom_h = height - top_h;

        let gauge_radius = half.min(top_h) * 0.52;
        let gauge_center = DVec2::new(width * 0.25, gauge_radius + top_h * 0.10);
        let face_diameter = half.min(top_h) * 0.78;
        let face_center = DVec2::new(width * 0.75, top_h * 0.5);

        let banner_y = top_h * BANNER_TOP_FRACTION;
        let banner_h = top_h * BANNER_HEIGHT_FRACTION;
        let left_banner = Rect::new(0.0, banner_y, half, banner_h);
        let right_banner = Rect::new(half, banner_y, half, banner_h);

        let btn_w = half * MUTE_BUTTON_WIDTH_FRACTION;
        let btn_h = banner_h * MUTE_BUTTON_HEIGHT_FRACTION;
        let btn_y = banner_y + banner_h + top_h * MUTE_BUTTON_GAP_FRACTION;
        let left_mute_button = Rect::new(half * MUTE_BUTTON_LEFT_INSET, btn_y, btn_w, btn_h);
        let right_mute_button =
            Rect::new(half + half * MUTE_BUTTON_RIGHT_INSET, btn_y, btn_w, btn_h);

        Self {
            width,
            height,
            top_h,
            bottom_h,
            gauge_center,
            gauge_radius,
            face_center,
            face_diameter,
            left_banner,
            right_banner,
            left_mute_button,
            right_mute_button,
            start_stop: Rect::new(0.0, top_h, half, bottom_h),
            ppm_panel: Rect::new(half, top_h, half, bottom_h),
        }
    }

    /// Regions for the next press, given which banners are on screen.
    pub fn hit_regions(&self, left_visible: bool, right_visible: bool) -> HitRegions {
        HitRegions {
            left_mute_button: left_visible.then_some(self.left_mute_button),
            right_mute_button: right_visible.then_some(self.right_mute_button),
            start_stop: Some(self.start_stop),
        }
    }
}

/// Needle angle in degrees for a displayed dB value.
#[inline]
pub fn gauge_angle_deg(db: f32) -> f64 {
    let t = ((db - DISPLAY_DB_MIN) / (DISPLAY_DB_MAX - DISPLAY_DB_MIN)).clamp(0.0, 1.0) as f64;
    GAUGE_ANGLE_MIN_DEG + (GAUGE_ANGLE_MAX_DEG - GAUGE_ANGLE_MIN_DEG) * t
}
