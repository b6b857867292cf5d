//! Overlay window creation and the best-effort blur-behind effect.

use std::ffi::c_void;

use windows::core::{w, BOOL};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{
    DwmEnableBlurBehindWindow, DwmSetWindowAttribute, DWMWA_TRANSITIONS_FORCEDISABLED,
    DWM_BB_BLURREGION, DWM_BB_ENABLE, DWM_BLURBEHIND,
};
use windows::Win32::Graphics::Gdi::{GetStockObject, BLACK_BRUSH, HBRUSH, HRGN};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, LoadCursorW, RegisterClassW, CS_HREDRAW, CS_VREDRAW, IDC_ARROW, WNDCLASSW,
    WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};

use crate::error::{BlurUnavailable, StartupError};
use crate::model::geometry::ScreenGeometry;

use super::super::session;

/// Create the borderless, topmost overlay window covering the usable area.
///
/// The class background is a solid black brush: the same color the layered
/// attributes later declare as the transparent key, so the window body is
/// invisible once styled. The window is not shown here; transparency must
/// be applied first.
pub fn create(geometry: &ScreenGeometry) -> Result<HWND, StartupError> {
    unsafe {
        let instance = GetModuleHandleW(None)
            .map_err(|e| StartupError::WindowCreation(e.message()))?;
        let class_name = w!("DotlightOverlay");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(session::wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)
                .map_err(|e| StartupError::WindowCreation(e.message()))?,
            hbrBackground: HBRUSH(GetStockObject(BLACK_BRUSH).0),
            lpszClassName: class_name,
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            return Err(StartupError::WindowCreation(
                "overlay window class registration failed".into(),
            ));
        }

        // Topmost, absent from the taskbar and Alt-Tab, never focused.
        let ex_style = WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE;

        let hwnd = CreateWindowExW(
            ex_style,
            class_name,
            w!("dotlight"),
            WS_POPUP,
            0,
            0,
            geometry.overlay_width(),
            geometry.overlay_height(),
            None,
            None,
            Some(instance.into()),
            None,
        )
        .map_err(|e| StartupError::WindowCreation(e.message()))?;

        Ok(hwnd)
    }
}

/// Ask the compositor to blur behind the overlay and skip show/hide
/// transitions. Purely cosmetic; callers log the error and continue.
pub fn enable_blur_behind(hwnd: HWND) -> Result<(), BlurUnavailable> {
    unsafe {
        let bb = DWM_BLURBEHIND {
            dwFlags: DWM_BB_ENABLE | DWM_BB_BLURREGION,
            fEnable: true.into(),
            hRgnBlur: HRGN::default(),
            fTransitionOnMaximized: false.into(),
        };
        DwmEnableBlurBehindWindow(hwnd, &bb).map_err(|e| BlurUnavailable(e.message()))?;

        let disable_transitions = BOOL::from(true);
        DwmSetWindowAttribute(
            hwnd,
            DWMWA_TRANSITIONS_FORCEDISABLED,
            &disable_transitions as *const BOOL as *const c_void,
            std::mem::size_of::<BOOL>() as u32,
        )
        .map_err(|e| BlurUnavailable(e.message()))?;

        Ok(())
    }
}
