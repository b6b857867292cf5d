//! The overlay session: state owner, window procedure and message loop.
//!
//! One `OverlaySession` is built at startup and attached to the overlay
//! window (`GWLP_USERDATA`, boxed `RefCell`). The window procedure borrows
//! it in short, checked scopes; a message that re-enters while the session
//! is borrowed is skipped rather than aliasing it.

use std::cell::RefCell;

use tracing::{debug, error, info, trace, warn};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, DestroyWindow, DispatchMessageW, GetCursorPos, GetMessageW,
    GetWindowLongPtrW, PostQuitMessage, SetWindowLongPtrW, ShowWindow, TranslateMessage,
    GWLP_USERDATA, MSG, SW_SHOW, WM_DESTROY, WM_HOTKEY, WM_PAINT, WM_TIMER,
};

use crate::error::StartupError;
use crate::events::{ControlEvent, EventBus};
use crate::model::color::Rgb;
use crate::model::constants::TICK_INTERVAL_MS;
use crate::model::indicator::IndicatorState;

use super::geometry;
use super::hotkeys::{self, HotkeyGuard, HOTKEY_TOGGLE_DOT, HOTKEY_TOGGLE_SETTINGS};
use super::overlay::{transparency, window, DotSurface};
use super::settings::SettingsPanel;
use super::timer::{TickTimer, TICK_TIMER_ID};

/// Everything the overlay owns, constructed once at startup and torn down
/// after the message loop exits.
pub struct OverlaySession {
    hwnd: HWND,
    indicator: IndicatorState,
    surface: DotSurface,
    bus: EventBus,
    settings: SettingsPanel,
    _hotkeys: HotkeyGuard,
    _timer: TickTimer,
}

impl OverlaySession {
    /// One 10 ms tick: apply pending control events, then pursue the cursor.
    ///
    /// A failed cursor query skips the tick; the timer keeps firing. While
    /// the dot is hidden no sample is taken, so the position freezes.
    fn on_tick(&mut self) {
        for event in self.bus.drain() {
            self.handle_event(event);
        }

        if !self.indicator.visible {
            return;
        }

        let mut cursor = POINT::default();
        if unsafe { GetCursorPos(&mut cursor) }.is_err() {
            trace!("cursor query failed; tick skipped");
            return;
        }

        self.indicator.advance(cursor.x as f64, cursor.y as f64);
        let (x, y) = self.indicator.position();
        self.surface.set_position(x, y);
    }

    /// Hotkey presses go through the bus like every other control source,
    /// then drain immediately; all mutation stays on this (main) thread.
    fn on_hotkey(&mut self, id: i32) {
        match id {
            HOTKEY_TOGGLE_DOT => self.bus.publish(ControlEvent::ToggleDot),
            HOTKEY_TOGGLE_SETTINGS => self.bus.publish(ControlEvent::ToggleSettings),
            _ => return,
        }
        for event in self.bus.drain() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: ControlEvent) {
        debug!(event = event.description(), "control event");
        match event {
            ControlEvent::ToggleDot => self.toggle_visibility(),
            ControlEvent::ToggleSettings => self.toggle_settings_panel(),
            ControlEvent::SetFillColor(color) => self.set_fill_color(color),
            ControlEvent::SetRingColor(color) => self.set_ring_color(color),
            ControlEvent::Exit => self.request_exit(),
        }
    }

    // === Entry points for external collaborators ===

    /// Show or hide the dot.
    pub fn toggle_visibility(&mut self) {
        let visible = self.indicator.toggle_visible();
        self.surface.set_visible(visible);
        info!(visible, "dot visibility toggled");
    }

    /// Open or close the settings panel. The panel and the dot are mutually
    /// exclusive: opening hides the dot, closing restores it.
    pub fn toggle_settings_panel(&mut self) {
        let open = self.indicator.toggle_settings();
        self.surface.set_visible(self.indicator.visible);
        if open {
            self.settings
                .open(self.hwnd, self.indicator.fill, self.indicator.ring);
        } else {
            self.settings.close();
        }
        info!(open, "settings panel toggled");
    }

    pub fn set_fill_color(&mut self, color: Rgb) {
        self.indicator.fill = color;
        self.surface.set_fill(color);
        info!(color = %color, "fill color changed");
    }

    pub fn set_ring_color(&mut self, color: Rgb) {
        self.indicator.ring = color;
        self.surface.set_ring(color);
        info!(color = %color, "ring color changed");
    }

    /// Graceful shutdown: ends the message loop, exit code 0.
    pub fn request_exit(&mut self) {
        info!("exit requested");
        unsafe { PostQuitMessage(0) };
    }
}

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_session() {
        error!("startup failed: {e}");
        std::process::exit(1);
    }
}

fn run_session() -> Result<(), StartupError> {
    let geometry = geometry::resolve()?;
    info!(
        width = geometry.width,
        height = geometry.height,
        reserved_strip = geometry.reserved_strip_height,
        "resolved display geometry"
    );

    // Order matters: the window must be fully styled (click-through, color
    // key) before it is ever shown, and every fatal registration must have
    // succeeded before the loop starts.
    let hwnd = window::create(&geometry)?;
    transparency::apply(hwnd)?;
    if let Err(e) = window::enable_blur_behind(hwnd) {
        warn!("{e}");
    }

    let hotkey_guard = hotkeys::register(hwnd)?;
    let timer = TickTimer::start(hwnd, TICK_TIMER_ID, TICK_INTERVAL_MS)?;

    let bus = EventBus::new();
    let settings = SettingsPanel::new(bus.publisher());
    let indicator = IndicatorState::new(&geometry);
    let surface = DotSurface::new(hwnd, &indicator);

    let session = Box::new(RefCell::new(OverlaySession {
        hwnd,
        indicator,
        surface,
        bus,
        settings,
        _hotkeys: hotkey_guard,
        _timer: timer,
    }));

    unsafe {
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, Box::into_raw(session) as isize);
        let _ = ShowWindow(hwnd, SW_SHOW);

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Detach and drop the session (unregisters hotkeys, stops the
        // timer, closes the panel), then destroy the window.
        let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut RefCell<OverlaySession>;
        if !ptr.is_null() {
            drop(Box::from_raw(ptr));
        }
        let _ = DestroyWindow(hwnd);
    }

    info!("exited cleanly");
    Ok(())
}

/// Borrow the session attached to the overlay window for one message.
///
/// Returns `None` before the session is attached or when a message arrives
/// re-entrantly while the session is already borrowed; such messages fall
/// through untouched.
fn with_session<R>(hwnd: HWND, f: impl FnOnce(&mut OverlaySession) -> R) -> Option<R> {
    let ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *const RefCell<OverlaySession>;
    if ptr.is_null() {
        return None;
    }
    let cell = unsafe { &*ptr };
    let mut session = cell.try_borrow_mut().ok()?;
    Some(f(&mut session))
}

pub(super) extern "system" fn wndproc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_TIMER => {
            if wparam.0 == TICK_TIMER_ID {
                with_session(hwnd, OverlaySession::on_tick);
            }
            LRESULT(0)
        }

        WM_PAINT => match with_session(hwnd, |session| session.surface.paint()) {
            Some(()) => LRESULT(0),
            None => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        },

        WM_HOTKEY => {
            with_session(hwnd, |session| session.on_hotkey(wparam.0 as i32));
            LRESULT(0)
        }

        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }

        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
