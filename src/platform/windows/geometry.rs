//! Display geometry resolution.
//!
//! One-shot startup query: primary display size plus the taskbar height,
//! found by locating the shell's `Shell_TrayWnd` window. A missing taskbar
//! is a hard error: a silent zero would let the overlay cover it.

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GetSystemMetrics, GetWindowRect, SM_CXSCREEN, SM_CYSCREEN,
};

use crate::error::StartupError;
use crate::model::geometry::ScreenGeometry;

/// Resolve the primary display dimensions and the reserved strip height.
pub fn resolve() -> Result<ScreenGeometry, StartupError> {
    unsafe {
        let width = GetSystemMetrics(SM_CXSCREEN);
        let height = GetSystemMetrics(SM_CYSCREEN);
        if width <= 0 || height <= 0 {
            return Err(StartupError::PlatformQuery(
                "primary display reported zero size".into(),
            ));
        }

        let tray = FindWindowW(w!("Shell_TrayWnd"), PCWSTR::null()).map_err(|e| {
            StartupError::PlatformQuery(format!("taskbar window not found: {}", e.message()))
        })?;

        let mut rect = RECT::default();
        GetWindowRect(tray, &mut rect).map_err(|e| {
            StartupError::PlatformQuery(format!("taskbar rect query failed: {}", e.message()))
        })?;

        Ok(ScreenGeometry {
            width,
            height,
            reserved_strip_height: rect.bottom - rect.top,
        })
    }
}
