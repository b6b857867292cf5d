//! Windows implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - display geometry (primary screen + taskbar strip)
//! - the layered, click-through overlay window and its GDI dot surface
//! - global hotkeys and the 10 ms update timer
//! - the overlay session (state owner, window procedure, message loop)
//! - the settings panel

pub mod geometry;
pub mod hotkeys;
pub mod overlay;
pub mod session;
pub mod settings;
pub mod timer;

pub use session::run;

use windows::Win32::Foundation::COLORREF;

use crate::model::color::Rgb;

/// The color key declared fully transparent to the compositor: pure black,
/// matching the overlay's background brush. Anything painted in this color
/// vanishes from screen.
pub(crate) const TRANSPARENT_KEY: COLORREF = COLORREF(0);

/// Convert to the GDI `0x00BBGGRR` layout.
pub(crate) fn colorref(color: Rgb) -> COLORREF {
    COLORREF(color.r as u32 | (color.g as u32) << 8 | (color.b as u32) << 16)
}

pub(crate) fn rgb_from_colorref(color: COLORREF) -> Rgb {
    Rgb::new(
        (color.0 & 0xFF) as u8,
        ((color.0 >> 8) & 0xFF) as u8,
        ((color.0 >> 16) & 0xFF) as u8,
    )
}
