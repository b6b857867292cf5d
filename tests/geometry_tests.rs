//! Tests for screen geometry and the derived overlay size.

use dotlight::model::geometry::ScreenGeometry;

#[test]
fn overlay_covers_screen_minus_reserved_strip() {
    let g = ScreenGeometry {
        width: 1920,
        height: 1080,
        reserved_strip_height: 40,
    };
    assert_eq!(g.overlay_width(), 1920);
    assert_eq!(g.overlay_height(), 1040);
}

#[test]
fn zero_strip_means_full_screen_overlay() {
    let g = ScreenGeometry {
        width: 2560,
        height: 1440,
        reserved_strip_height: 0,
    };
    assert_eq!(g.overlay_width(), 2560);
    assert_eq!(g.overlay_height(), 1440);
}

#[test]
fn center_is_display_midpoint() {
    let g = ScreenGeometry {
        width: 1920,
        height: 1080,
        reserved_strip_height: 40,
    };
    assert_eq!(g.center(), (960.0, 540.0));
}
