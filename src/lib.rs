//! Click-through dot overlay that follows the mouse cursor.
//!
//! The crate is split into a pure core and a platform layer:
//!
//! - [`model`]: indicator state, smoothing, geometry and colors. No FFI,
//!   so the whole behavioral contract is testable on any host.
//! - [`events`]: the control-event channel connecting hotkeys and the
//!   settings panel to the main loop.
//! - [`error`]: the startup failure taxonomy.
//! - [`platform`]: the Win32 implementation (layered window, GDI surface,
//!   global hotkeys, update timer). Only built on Windows.

pub mod error;
pub mod events;
pub mod model;
pub mod platform;

// Re-export the types most callers touch
pub use error::{BlurUnavailable, StartupError};
pub use events::{ControlEvent, EventBus, EventPublisher};
pub use model::color::Rgb;
pub use model::geometry::ScreenGeometry;
pub use model::indicator::IndicatorState;
