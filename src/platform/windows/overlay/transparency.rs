//! Input transparency: the click-through window attributes.
//!
//! Adds `WS_EX_LAYERED | WS_EX_TRANSPARENT` to the extended style and sets
//! the black color key, so the window is composited but never hit-tested.
//! Must run after the window exists and before it is shown, otherwise an
//! input-blocking frame could flash. Re-applying is a no-op.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowLongPtrW, SetLayeredWindowAttributes, SetWindowLongPtrW, GWL_EXSTYLE, LWA_COLORKEY,
    WS_EX_LAYERED, WS_EX_TRANSPARENT,
};

use crate::error::StartupError;

use super::super::TRANSPARENT_KEY;

const CLICK_THROUGH_BITS: isize = (WS_EX_LAYERED.0 | WS_EX_TRANSPARENT.0) as isize;

/// The extended style with click-through semantics added. Idempotent.
fn with_click_through(ex_style: isize) -> isize {
    ex_style | CLICK_THROUGH_BITS
}

/// Apply layered + input-transparent styling to the overlay window.
pub fn apply(hwnd: HWND) -> Result<(), StartupError> {
    unsafe {
        let current = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
        SetWindowLongPtrW(hwnd, GWL_EXSTYLE, with_click_through(current));

        // SetWindowLongPtrW's return value cannot distinguish failure from
        // a previous value of zero; verify by reading the style back.
        let applied = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
        if applied & CLICK_THROUGH_BITS != CLICK_THROUGH_BITS {
            return Err(StartupError::TransparencyApplication(
                "extended style flags were not applied".into(),
            ));
        }

        SetLayeredWindowAttributes(hwnd, TRANSPARENT_KEY, 0, LWA_COLORKEY)
            .map_err(|e| StartupError::TransparencyApplication(e.message()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_through_adds_layered_and_transparent() {
        let styled = with_click_through(0);
        assert_eq!(styled & CLICK_THROUGH_BITS, CLICK_THROUGH_BITS);
    }

    #[test]
    fn click_through_is_idempotent() {
        let once = with_click_through(0x0008); // WS_EX_TOPMOST
        let twice = with_click_through(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn click_through_preserves_existing_bits() {
        let existing = 0x0008_0088; // unrelated ex-style bits
        let styled = with_click_through(existing);
        assert_eq!(styled & existing, existing);
    }
}
