//! Visual defaults and loop tuning constants.

use super::color::Rgb;

// === Visual Defaults ===

/// Dot radius in pixels.
pub const DOT_RADIUS: i32 = 10;

/// Ring (outline) width in pixels.
pub const RING_WIDTH: i32 = 5;

/// Default dot fill color (aqua).
pub const DEFAULT_FILL: Rgb = Rgb::new(0, 255, 255);

/// Default ring color (red).
pub const DEFAULT_RING: Rgb = Rgb::new(255, 0, 0);

// === Update Loop ===

/// Update tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 10;

/// First-order smoothing factor: each tick moves this fraction of the
/// remaining distance toward the cursor. At 10 ms per tick the dot covers
/// ~90% of a step change in roughly 22 ticks.
pub const SMOOTHING_ALPHA: f64 = 0.1;
