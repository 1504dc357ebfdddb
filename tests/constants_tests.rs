// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn flake_ranges_match_documented_bounds() {
    assert!((FLAKE_RADIUS_MIN - 1.2).abs() < 1e-6);
    assert!((FLAKE_RADIUS_MIN + FLAKE_RADIUS_SPAN - 3.5).abs() < 1e-6);
    assert!((FLAKE_SPEED_Y_MIN + FLAKE_SPEED_Y_SPAN - 60.0).abs() < 1e-6);
    assert!((FLAKE_SPEED_X_MIN + FLAKE_SPEED_X_SPAN - 10.0).abs() < 1e-6);
    assert!((FLAKE_OPACITY_MIN + FLAKE_OPACITY_SPAN - 0.8).abs() < 1e-6);
    assert!(FLAKE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn face_physics_constants_are_stable() {
    // Damping must bleed energy, spring must be a gentle pull
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(SPRING > 0.0 && SPRING < 1.0);
    assert!(HOLE_RADIUS > 0.0);
    assert!(REPULSION_STRENGTH > 0.0);
    assert!(GRID_SIZE >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Flakes must leave the surface before they are recycled or wrapped
    assert!(RECYCLE_MARGIN > 0.0);
    assert!(WRAP_MARGIN >= RECYCLE_MARGIN);
    // Largest painted glow fits in the wrap margin so wrapping is invisible
    assert!((FLAKE_RADIUS_MIN + FLAKE_RADIUS_SPAN) * FLAKE_GLOW_SCALE <= WRAP_MARGIN);
    assert!(TOUCH_RELEASE_DELAY_MS > 0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
}
