//! Control-event channel for decoupled inter-module communication.
//!
//! Hotkey handlers and the settings panel publish [`ControlEvent`]s; only
//! the main loop drains them and applies the resulting state changes. This
//! keeps `IndicatorState` single-writer without any locking.
//!
//! ```text
//! ┌─────────────┐          ┌──────────────────┐
//! │   Hotkeys   │          │  Settings panel  │
//! └──────┬──────┘          └────────┬─────────┘
//!        │ publish()                │ publish()
//!        ▼                          ▼
//! ┌─────────────────────────────────────────────┐
//! │                  EventBus                   │
//! │               (mpsc channel)                │
//! └─────────────────────┬───────────────────────┘
//!                       │ drain()  (main loop, each tick)
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │               OverlaySession                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The bus is owned by the session, not a process-wide static; publishers
//! are cloned out to whoever needs to emit.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::ControlEvent;
