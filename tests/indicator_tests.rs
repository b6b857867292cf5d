//! Tests for the indicator model: smoothing, visibility, mutual exclusion.

use dotlight::model::constants::*;
use dotlight::model::geometry::ScreenGeometry;
use dotlight::model::indicator::IndicatorState;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn test_geometry() -> ScreenGeometry {
    ScreenGeometry {
        width: 1920,
        height: 1080,
        reserved_strip_height: 40,
    }
}

// === Defaults ===

#[test]
fn new_state_uses_visual_defaults() {
    let state = IndicatorState::new(&test_geometry());
    assert_eq!(state.radius, DOT_RADIUS);
    assert_eq!(state.fill, DEFAULT_FILL);
    assert_eq!(state.ring, DEFAULT_RING);
    assert!(state.visible);
    assert!(!state.settings_open);
}

#[test]
fn new_state_starts_at_display_center() {
    let state = IndicatorState::new(&test_geometry());
    assert!(approx_eq(state.x, 960.0));
    assert!(approx_eq(state.y, 540.0));
}

// === Smoothing ===

#[test]
fn one_tick_matches_smoothing_formula() {
    let mut state = IndicatorState::new(&test_geometry());
    state.x = 100.0;
    state.y = 200.0;

    assert!(state.advance(340.0, 80.0));

    assert!(approx_eq(state.x, 100.0 + (340.0 - 100.0) * SMOOTHING_ALPHA));
    assert!(approx_eq(state.y, 200.0 + (80.0 - 200.0) * SMOOTHING_ALPHA));
}

#[test]
fn repeated_ticks_decay_geometrically() {
    let mut state = IndicatorState::new(&test_geometry());
    state.x = 0.0;
    state.y = 0.0;

    for _ in 0..5 {
        state.advance(100.0, 100.0);
    }

    // After n ticks toward a fixed target: c = target * (1 - (1 - α)^n)
    let expected = 100.0 * (1.0 - (1.0 - SMOOTHING_ALPHA).powi(5));
    assert!(approx_eq(state.x, expected));
    assert!(approx_eq(state.y, expected));
}

#[test]
fn converges_within_ten_percent_after_22_ticks() {
    let mut state = IndicatorState::new(&test_geometry());
    state.x = 0.0;
    state.y = 0.0;

    let initial_distance = (100.0f64.powi(2) + 100.0f64.powi(2)).sqrt();
    for _ in 0..22 {
        state.advance(100.0, 100.0);
    }

    let dx = 100.0 - state.x;
    let dy = 100.0 - state.y;
    let distance = (dx * dx + dy * dy).sqrt();
    assert!(distance <= 0.1 * initial_distance);
}

#[test]
fn position_is_not_clamped_to_overlay_bounds() {
    // A cursor on a second monitor may pull the dot off-canvas; that is
    // accepted behavior, not clamped away.
    let mut state = IndicatorState::new(&test_geometry());

    for _ in 0..200 {
        state.advance(5000.0, -500.0);
    }

    assert!(state.x > 1920.0);
    assert!(state.y < 0.0);
}

// === Visibility ===

#[test]
fn hidden_ticks_never_move_the_dot() {
    let mut state = IndicatorState::new(&test_geometry());
    state.visible = false;
    let (x0, y0) = state.position();

    for _ in 0..10 {
        assert!(!state.advance(1000.0, 1000.0));
    }

    assert!(approx_eq(state.x, x0));
    assert!(approx_eq(state.y, y0));
}

#[test]
fn toggle_twice_restores_visibility() {
    let mut state = IndicatorState::new(&test_geometry());
    let initial = state.visible;

    assert_eq!(state.toggle_visible(), !initial);
    assert_eq!(state.toggle_visible(), initial);
}

// === Settings mutual exclusion ===

#[test]
fn opening_settings_hides_the_dot() {
    let mut state = IndicatorState::new(&test_geometry());
    assert!(state.visible);

    assert!(state.toggle_settings());
    assert!(state.settings_open);
    assert!(!state.visible);
}

#[test]
fn closing_settings_restores_the_dot() {
    let mut state = IndicatorState::new(&test_geometry());
    state.toggle_settings();

    assert!(!state.toggle_settings());
    assert!(!state.settings_open);
    assert!(state.visible);
}

#[test]
fn closing_settings_restores_the_dot_regardless_of_toggles() {
    let mut state = IndicatorState::new(&test_geometry());

    state.toggle_settings();
    for _ in 0..3 {
        state.toggle_visible();
    }

    state.toggle_settings();
    assert!(state.visible);

    // Odd number of toggles while open; closing still restores.
    state.toggle_settings();
    state.toggle_visible();
    state.toggle_settings();
    assert!(state.visible);
}
