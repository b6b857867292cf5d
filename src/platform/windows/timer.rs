//! Repeating update timer with an explicit cancel handle.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{KillTimer, SetTimer};

use crate::error::StartupError;

/// Timer ID carried in `WM_TIMER`'s wparam.
pub const TICK_TIMER_ID: usize = 1;

/// A running `WM_TIMER` schedule. Dropping the handle stops the timer;
/// there is no other cancellation path.
pub struct TickTimer {
    hwnd: HWND,
    id: usize,
}

impl TickTimer {
    pub fn start(hwnd: HWND, id: usize, interval_ms: u32) -> Result<Self, StartupError> {
        let timer = unsafe { SetTimer(Some(hwnd), id, interval_ms, None) };
        if timer == 0 {
            return Err(StartupError::WindowCreation(
                "update timer could not be started".into(),
            ));
        }
        Ok(Self { hwnd, id })
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        unsafe {
            let _ = KillTimer(Some(self.hwnd), self.id);
        }
    }
}
