// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Opacity and alpha values are CSS fractions
    assert!(PARTICLE_MAX_OPACITY > 0.0 && PARTICLE_MAX_OPACITY <= 1.0);
    assert!(LINK_ALPHA > 0.0 && LINK_ALPHA <= 1.0);

    // Smoothing must stay a fraction or the trail would overshoot
    assert!(CURSOR_TRAIL_SMOOTHING > 0.0 && CURSOR_TRAIL_SMOOTHING < 1.0);

    // Lifetimes are whole frames, at least one
    assert!(PARTICLE_LIFE_MIN >= 1.0);
    assert!(PARTICLE_LIFE_SPAN >= 0.0);
    assert!(PARTICLE_RADIUS_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(REVEAL_CASCADE_STEP_MS > 0);
    assert!(TYPING_CHAR_INTERVAL_MS > 0);
    assert!(TYPING_START_DELAY_MS >= 0);
    assert!(COUNTER_DURATION_MS > 0);
    assert!(SIMULATED_SUBMIT_MS > 0);
    assert!(NOTIFICATION_DISMISS_MS > 0);
    assert!(RESIZE_DEBOUNCE_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The toast must outlive the simulated send that triggers it
    assert!(NOTIFICATION_DISMISS_MS > SIMULATED_SUBMIT_MS);

    // Nav turns solid before it starts auto-hiding
    assert!(NAV_AUTOHIDE_AFTER_PX > NAV_SOLID_AFTER_PX);

    // Hover enlarges the dot more than the outline
    assert!(CURSOR_DOT_HOVER_SCALE > CURSOR_OUTLINE_HOVER_SCALE);
    assert!(CURSOR_OUTLINE_HOVER_SCALE > 1.0);

    // Parallax directions: generic elements drift up, cards drift down
    assert!(PARALLAX_RATE < 0.0);
    assert!(FLOATING_CARD_BASE_RATE > 0.0);

    // Text fields need at least one character to be meaningful
    assert!(TEXT_FIELD_MIN_CHARS >= 1);
    assert!(PARTICLE_MAX_COUNT > 0);
}
