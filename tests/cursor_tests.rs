// Host-side tests for the cursor trail.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod cursor {
    include!("../src/core/cursor.rs");
}

use cursor::*;
use glam::Vec2;

#[test]
fn dot_snaps_to_pointer() {
    let mut trail = CursorTrail::default();
    trail.set_target(Vec2::new(320.0, 240.0));
    trail.step();
    assert_eq!(trail.dot(), Vec2::new(320.0, 240.0));
    assert!(trail.outline().x < 320.0);
}

#[test]
fn outline_closes_ten_percent_per_frame() {
    let mut trail = CursorTrail::default();
    trail.set_target(Vec2::new(100.0, 0.0));
    trail.step();
    assert!((trail.outline().x - 10.0).abs() < 1e-4);
    trail.step();
    assert!((trail.outline().x - 19.0).abs() < 1e-4);
}

#[test]
fn outline_converges_without_overshoot() {
    let target = Vec2::new(700.0, -250.0);
    let mut trail = CursorTrail::default();
    trail.set_target(target);
    let mut prev_gap = target.distance(trail.outline());
    for _ in 0..300 {
        trail.step();
        let o = trail.outline();
        assert!(o.x >= 0.0 && o.x <= target.x);
        assert!(o.y <= 0.0 && o.y >= target.y);
        let gap = target.distance(o);
        assert!(gap <= prev_gap);
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-2);
}

#[test]
fn outline_follows_a_retargeted_pointer() {
    let mut trail = CursorTrail::default();
    trail.set_target(Vec2::new(500.0, 500.0));
    for _ in 0..20 {
        trail.step();
    }
    trail.set_target(Vec2::new(0.0, 0.0));
    let before = trail.outline();
    trail.step();
    assert!(trail.outline().x < before.x);
    assert!(trail.outline().x > 0.0);
}

#[test]
fn hover_scales_markers() {
    let (dot, outline) = hover_transforms(true);
    assert_eq!(dot, "translate(-50%, -50%) scale(2)");
    assert_eq!(outline, "translate(-50%, -50%) scale(1.5)");
    let (dot, outline) = hover_transforms(false);
    assert_eq!(dot, "translate(-50%, -50%) scale(1)");
    assert_eq!(outline, "translate(-50%, -50%) scale(1)");
}

#[test]
fn target_is_kept_until_next_move() {
    let mut trail = CursorTrail::default();
    assert_eq!(trail.target(), Vec2::ZERO);
    trail.set_target(Vec2::new(12.0, 34.0));
    trail.step();
    trail.step();
    assert_eq!(trail.target(), Vec2::new(12.0, 34.0));
    assert_eq!(trail.dot(), trail.target());
}
