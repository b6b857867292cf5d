//! Process-wide hotkeys, delivered as `WM_HOTKEY` on the overlay's loop.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, MOD_ALT, MOD_CONTROL,
};

use crate::error::StartupError;

// Hotkey IDs
pub const HOTKEY_TOGGLE_DOT: i32 = 1;
pub const HOTKEY_TOGGLE_SETTINGS: i32 = 2;

/// Registered hotkeys; unregisters both on drop.
pub struct HotkeyGuard {
    hwnd: HWND,
}

/// Register both global combinations on the overlay window.
///
/// Fails loudly if either combination is already claimed by another
/// process; running without hotkeys would leave the overlay uncontrollable.
pub fn register(hwnd: HWND) -> Result<HotkeyGuard, StartupError> {
    unsafe {
        RegisterHotKey(Some(hwnd), HOTKEY_TOGGLE_DOT, MOD_CONTROL | MOD_ALT, 0x44) // Ctrl+Alt+D
            .map_err(|e| StartupError::HotkeyRegistration {
                combo: "Ctrl+Alt+D",
                reason: e.message(),
            })?;

        let settings =
            RegisterHotKey(Some(hwnd), HOTKEY_TOGGLE_SETTINGS, MOD_CONTROL | MOD_ALT, 0x53); // Ctrl+Alt+S
        if let Err(e) = settings {
            let _ = UnregisterHotKey(Some(hwnd), HOTKEY_TOGGLE_DOT);
            return Err(StartupError::HotkeyRegistration {
                combo: "Ctrl+Alt+S",
                reason: e.message(),
            });
        }
    }
    Ok(HotkeyGuard { hwnd })
}

impl Drop for HotkeyGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = UnregisterHotKey(Some(self.hwnd), HOTKEY_TOGGLE_DOT);
            let _ = UnregisterHotKey(Some(self.hwnd), HOTKEY_TOGGLE_SETTINGS);
        }
    }
}
