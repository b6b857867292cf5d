//! Failure taxonomy.
//!
//! The four `StartupError` variants are unrecoverable: a misconfigured
//! overlay (visible but input-blocking, or running without its hotkeys) is
//! worse than not running, so the process aborts before entering the
//! message loop. `BlurUnavailable` is the one non-fatal case; callers log
//! it and move on.
//!
//! OS error details are carried as strings so these types stay free of
//! platform bindings and compile everywhere.

use thiserror::Error;

/// Fatal errors raised during startup, before the message loop runs.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Screen or reserved-strip geometry could not be resolved.
    #[error("display geometry query failed: {0}")]
    PlatformQuery(String),

    /// The overlay window could not be created or styled.
    #[error("overlay window creation failed: {0}")]
    WindowCreation(String),

    /// The click-through window attributes could not be applied.
    #[error("input transparency could not be applied: {0}")]
    TransparencyApplication(String),

    /// A global hotkey combination is already claimed by another process.
    #[error("global hotkey {combo} could not be registered: {reason}")]
    HotkeyRegistration {
        combo: &'static str,
        reason: String,
    },
}

/// The compositor declined the blur-behind effect. Cosmetic only.
#[derive(Debug, Error)]
#[error("compositor blur unavailable: {0}")]
pub struct BlurUnavailable(pub String);
