//! Indicator state and the pursuit-smoothing step.

use super::color::Rgb;
use super::constants::*;
use super::geometry::ScreenGeometry;

/// The single mutable state of the process: dot position, appearance,
/// visibility and the settings-panel flag.
///
/// Position is advanced only by the update loop; visibility and colors
/// change only through control events drained on the main loop, so every
/// field has exactly one writer.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    /// Current dot center, smoothed toward the cursor.
    pub x: f64,
    pub y: f64,
    pub radius: i32,
    pub fill: Rgb,
    pub ring: Rgb,
    pub visible: bool,
    pub settings_open: bool,
}

impl IndicatorState {
    /// New state with the dot centered on the display.
    pub fn new(geometry: &ScreenGeometry) -> Self {
        let (x, y) = geometry.center();
        Self {
            x,
            y,
            radius: DOT_RADIUS,
            fill: DEFAULT_FILL,
            ring: DEFAULT_RING,
            visible: true,
            settings_open: false,
        }
    }

    /// One smoothing tick toward the sampled cursor position:
    /// `c += (target - c) * α`.
    ///
    /// Returns `false` without moving when the dot is hidden, so the
    /// position freezes while invisible. The target is intentionally not
    /// clamped to the overlay bounds; a cursor outside the primary display
    /// pulls the dot off-canvas.
    pub fn advance(&mut self, target_x: f64, target_y: f64) -> bool {
        if !self.visible {
            return false;
        }
        self.x += (target_x - self.x) * SMOOTHING_ALPHA;
        self.y += (target_y - self.y) * SMOOTHING_ALPHA;
        true
    }

    /// Flip dot visibility; returns the new value.
    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Flip the settings panel open/closed; returns the new value.
    ///
    /// The panel and the dot are mutually exclusive: opening the panel
    /// always hides the dot, closing it always restores the dot, no matter
    /// how visibility was toggled in between.
    pub fn toggle_settings(&mut self) -> bool {
        self.settings_open = !self.settings_open;
        self.visible = !self.settings_open;
        self.settings_open
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
