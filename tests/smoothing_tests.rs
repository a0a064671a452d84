// Host-side tests for microphone level smoothing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod calm {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
}

use calm::params::SmoothingParams;
use calm::smoothing::*;

#[test]
fn first_step_moves_fifteen_percent_towards_raw() {
    let mut s = SignalSmoother::new(SmoothingParams::default());
    s.update(1.0);
    assert!((s.smoothed() - 0.15).abs() < 1e-6);
    s.update(1.0);
    assert!((s.smoothed() - (0.15 + 0.85 * 0.15)).abs() < 1e-6);
}

#[test]
fn smoothed_level_never_overshoots_raw() {
    let mut s = SignalSmoother::new(SmoothingParams::default());
    let raws = [0.0, 0.9, 0.1, 0.1, 1.0, 0.0, 0.5, 0.25, 0.75, 0.0];
    for &raw in raws.iter().cycle().take(200) {
        let prev = s.smoothed();
        s.update(raw);
        let next = s.smoothed();
        let (lo, hi) = if prev <= raw { (prev, raw) } else { (raw, prev) };
        assert!(
            next >= lo && next <= hi,
            "step from {prev} towards {raw} landed at {next}"
        );
    }
}

#[test]
fn silence_maps_to_bottom_of_display_range() {
    let mut s = SignalSmoother::new(SmoothingParams::default());
    let db = s.update(0.0);
    assert_eq!(db, 30.0);
    assert!(s.dbfs().is_finite());
    assert!((s.dbfs() - -120.0).abs() < 1e-3);
}

#[test]
fn full_scale_converges_to_top_of_display_range() {
    let mut s = SignalSmoother::new(SmoothingParams::default());
    let mut db = 0.0;
    for _ in 0..200 {
        db = s.update(1.0);
    }
    assert!((db - 100.0).abs() < 1e-3);
    // louder than full scale still clamps
    for _ in 0..200 {
        db = s.update(4.0);
    }
    assert_eq!(db, 100.0);
}

#[test]
fn mid_range_maps_linearly() {
    // -30 dBFS sits halfway between -60 and 0
    assert!((map_clamped(-30.0, -60.0, 0.0, 30.0, 100.0) - 65.0).abs() < 1e-4);
    assert!((amplitude_to_dbfs(0.1, 1e-6) - -20.0).abs() < 1e-4);
    assert_eq!(map_clamped(-90.0, -60.0, 0.0, 30.0, 100.0), 30.0);
    assert_eq!(map_clamped(10.0, -60.0, 0.0, 30.0, 100.0), 100.0);
}
