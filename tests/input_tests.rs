// Host-side tests for layout hit-regions and press routing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod calm {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
}

use calm::input::*;
use calm::layout::*;
use glam::DVec2;

fn layout() -> Layout {
    Layout::compute(1000.0, 500.0)
}

#[test]
fn rect_contains_is_edge_inclusive() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert!(r.contains(DVec2::new(10.0, 20.0)));
    assert!(r.contains(DVec2::new(40.0, 60.0)));
    assert!(!r.contains(DVec2::new(40.01, 60.0)));
    assert!(!r.contains(DVec2::new(9.99, 30.0)));
}

#[test]
fn layout_splits_top_and_bottom() {
    let l = layout();
    assert!((l.top_h - 350.0).abs() < 1e-9);
    assert!((l.bottom_h - 150.0).abs() < 1e-9);
    let ss = l.start_stop;
    assert_eq!((ss.x, ss.w), (0.0, 500.0));
    assert!((ss.y - 350.0).abs() < 1e-9 && (ss.y + ss.h - 500.0).abs() < 1e-9);
    // mute buttons sit below their banners, one per half
    assert!(l.left_mute_button.y > l.left_banner.y + l.left_banner.h);
    assert!(l.left_mute_button.x + l.left_mute_button.w <= 500.0);
    assert!(l.right_mute_button.x >= 500.0);
    assert!(l.right_mute_button.x + l.right_mute_button.w <= 1000.0);
    assert!(l.left_mute_button.y + l.left_mute_button.h < l.top_h);
}

#[test]
fn hidden_banners_publish_no_mute_regions() {
    let l = layout();
    let regions = l.hit_regions(false, false);
    assert!(regions.left_mute_button.is_none());
    assert!(regions.right_mute_button.is_none());
    assert_eq!(regions.start_stop, Some(l.start_stop));

    let centre = l.left_mute_button.center();
    assert_eq!(route_press(centre, &regions), None);
}

#[test]
fn presses_route_to_visible_controls() {
    let l = layout();
    let regions = l.hit_regions(true, true);
    assert_eq!(
        route_press(l.left_mute_button.center(), &regions),
        Some(PressAction::ToggleMuteLeft)
    );
    assert_eq!(
        route_press(l.right_mute_button.center(), &regions),
        Some(PressAction::ToggleMuteRight)
    );
    assert_eq!(
        route_press(DVec2::new(100.0, 450.0), &regions),
        Some(PressAction::ToggleMeasurement)
    );
    // ppm panel and the face are not controls
    assert_eq!(route_press(DVec2::new(750.0, 450.0), &regions), None);
    assert_eq!(route_press(l.face_center, &regions), None);
}

#[test]
fn start_stop_excludes_its_right_edge() {
    let l = layout();
    let regions = l.hit_regions(false, false);
    assert_eq!(route_press(DVec2::new(500.0, 450.0), &regions), None);
    assert_eq!(
        route_press(DVec2::new(499.9, 450.0), &regions),
        Some(PressAction::ToggleMeasurement)
    );
    assert_eq!(
        route_press(DVec2::new(0.0, 500.0), &regions),
        Some(PressAction::ToggleMeasurement)
    );
}

#[test]
fn first_matching_region_wins() {
    let overlap = Rect::new(0.0, 0.0, 100.0, 100.0);
    let regions = HitRegions {
        left_mute_button: Some(overlap),
        right_mute_button: Some(overlap),
        start_stop: Some(overlap),
    };
    assert_eq!(
        route_press(DVec2::new(50.0, 50.0), &regions),
        Some(PressAction::ToggleMuteLeft)
    );
    let regions = HitRegions {
        left_mute_button: None,
        ..regions
    };
    assert_eq!(
        route_press(DVec2::new(50.0, 50.0), &regions),
        Some(PressAction::ToggleMuteRight)
    );
}

#[test]
fn empty_regions_ignore_every_press() {
    let regions = HitRegions::default();
    for p in [DVec2::ZERO, DVec2::new(100.0, 450.0), DVec2::new(-5.0, 9e9)] {
        assert_eq!(route_press(p, &regions), None);
    }
}

#[test]
fn portrait_guard_triggers_only_when_taller_than_wide() {
    assert!(is_portrait(400.0, 800.0));
    assert!(!is_portrait(800.0, 400.0));
    assert!(!is_portrait(600.0, 600.0));
}

#[test]
fn gauge_angle_spans_upper_half_circle() {
    assert_eq!(gauge_angle_deg(30.0), -180.0);
    assert_eq!(gauge_angle_deg(100.0), 0.0);
    assert!((gauge_angle_deg(65.0) - -90.0).abs() < 1e-4);
    assert_eq!(gauge_angle_deg(10.0), -180.0);
    assert_eq!(gauge_angle_deg(140.0), 0.0);
}

#[test]
fn emulated_mouse_after_touch_is_dropped() {
    let mut f = PressFilter::default();
    assert!(f.accept(PressKind::Mouse, 0.0));
    assert!(f.accept(PressKind::Touch, 1000.0));
    assert!(!f.accept(PressKind::Mouse, 1020.0));
    assert!(!f.accept(PressKind::Mouse, 1500.0));
    assert!(f.accept(PressKind::Mouse, 1600.0));
    // touches are never filtered
    assert!(f.accept(PressKind::Touch, 1601.0));
    assert!(f.accept(PressKind::Touch, 1602.0));
}
