//! Pure application model: indicator state, screen geometry, colors.
//!
//! Nothing in this module touches the OS, so the smoothing and toggle
//! contracts are exercised by ordinary integration tests.

pub mod color;
pub mod constants;
pub mod geometry;
pub mod indicator;

pub use color::Rgb;
pub use geometry::ScreenGeometry;
pub use indicator::IndicatorState;
