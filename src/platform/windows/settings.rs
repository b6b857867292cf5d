//! Settings panel.
//!
//! A small captioned, always-on-top window with color pickers, an info box
//! and an exit action. Non-modal: the single main message loop services it,
//! so it never re-enters the overlay's window procedure. The panel owns no
//! application state; every interaction is published as a [`ControlEvent`]
//! and applied by the session on the next drain.

use std::cell::Cell;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::Dialogs::{ChooseColorW, CC_FULLOPEN, CC_RGBINIT, CHOOSECOLORW};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetWindowLongPtrW, LoadCursorW, MessageBoxW,
    RegisterClassW, SetWindowLongPtrW, ShowWindow, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT,
    GWLP_USERDATA, HMENU, IDC_ARROW, MB_ICONINFORMATION, MB_OK, SW_SHOW, WINDOW_EX_STYLE,
    WM_CLOSE, WM_COMMAND, WM_CREATE, WM_NCDESTROY, WNDCLASSW, WS_CAPTION, WS_CHILD, WS_EX_TOPMOST,
    WS_OVERLAPPED, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
};

use crate::events::{ControlEvent, EventPublisher};
use crate::model::color::Rgb;

use super::{colorref, rgb_from_colorref};

// Control IDs
const ID_FILL_BUTTON: i32 = 101;
const ID_RING_BUTTON: i32 = 102;
const ID_INFO_BUTTON: i32 = 103;
const ID_EXIT_BUTTON: i32 = 104;

// Window dimensions
const WINDOW_WIDTH: i32 = 260;
const WINDOW_HEIGHT: i32 = 250;

// Layout constants
const MARGIN: i32 = 20;
const ROW_HEIGHT: i32 = 38;
const BUTTON_WIDTH: i32 = WINDOW_WIDTH - 2 * MARGIN - 16;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-window data handed to the panel's window procedure.
///
/// Carries the publisher plus the colors to seed the picker dialogs with;
/// the panel tracks its own copies so consecutive picks start from the
/// previous choice without reading session state.
struct PanelContext {
    publisher: EventPublisher,
    fill: Cell<Rgb>,
    ring: Cell<Rgb>,
}

/// Handle to the (at most one) settings panel window.
pub struct SettingsPanel {
    publisher: EventPublisher,
    hwnd: Option<HWND>,
}

impl SettingsPanel {
    pub fn new(publisher: EventPublisher) -> Self {
        Self {
            publisher,
            hwnd: None,
        }
    }

    /// Create and show the panel. No-op if it is already open.
    pub fn open(&mut self, owner: HWND, fill: Rgb, ring: Rgb) {
        if self.hwnd.is_some() {
            return;
        }
        let ctx = PanelContext {
            publisher: self.publisher.clone(),
            fill: Cell::new(fill),
            ring: Cell::new(ring),
        };
        match unsafe { create_panel(owner, ctx) } {
            Ok(hwnd) => self.hwnd = Some(hwnd),
            Err(e) => tracing::warn!("settings panel could not be created: {}", e.message()),
        }
    }

    /// Destroy the panel window. No-op if it is not open.
    pub fn close(&mut self) {
        if let Some(hwnd) = self.hwnd.take() {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }
    }
}

impl Drop for SettingsPanel {
    fn drop(&mut self) {
        self.close();
    }
}

unsafe fn create_panel(owner: HWND, ctx: PanelContext) -> windows::core::Result<HWND> {
    let instance = GetModuleHandleW(None)?;
    let class_name = w!("DotlightSettings");

    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(panel_wnd_proc),
        hInstance: instance.into(),
        hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
        hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
        lpszClassName: class_name,
        ..Default::default()
    };
    // Fails with "class already exists" on every reopen; harmless.
    let _ = RegisterClassW(&wc);

    let hwnd = CreateWindowExW(
        WS_EX_TOPMOST,
        class_name,
        w!("Settings"),
        WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU,
        CW_USEDEFAULT,
        CW_USEDEFAULT,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        Some(owner),
        None,
        Some(instance.into()),
        None,
    )?;

    SetWindowLongPtrW(hwnd, GWLP_USERDATA, Box::into_raw(Box::new(ctx)) as isize);
    let _ = ShowWindow(hwnd, SW_SHOW);
    Ok(hwnd)
}

unsafe fn panel_context<'a>(hwnd: HWND) -> Option<&'a PanelContext> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const PanelContext;
    if ptr.is_null() {
        None
    } else {
        Some(&*ptr)
    }
}

unsafe extern "system" fn panel_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            create_controls(hwnd);
            LRESULT(0)
        }

        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            handle_command(hwnd, control_id);
            LRESULT(0)
        }

        // The close button routes through the same toggle as the hotkey so
        // the dot/panel mutual exclusion stays consistent; the session
        // destroys the window when it handles the event.
        WM_CLOSE => {
            if let Some(ctx) = panel_context(hwnd) {
                ctx.publisher.publish(ControlEvent::ToggleSettings);
            }
            LRESULT(0)
        }

        WM_NCDESTROY => {
            let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut PanelContext;
            if !ptr.is_null() {
                drop(Box::from_raw(ptr));
            }
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn create_controls(hwnd: HWND) {
    let instance = GetModuleHandleW(None).unwrap_or_default();
    let mut y = MARGIN;

    create_label(hwnd, instance.into(), MARGIN, y, "dotlight");
    y += ROW_HEIGHT;

    create_button(hwnd, instance.into(), MARGIN, y, "Pick Fill Color", ID_FILL_BUTTON);
    y += ROW_HEIGHT;
    create_button(hwnd, instance.into(), MARGIN, y, "Pick Ring Color", ID_RING_BUTTON);
    y += ROW_HEIGHT;
    create_button(hwnd, instance.into(), MARGIN, y, "Info", ID_INFO_BUTTON);
    y += ROW_HEIGHT;
    create_button(hwnd, instance.into(), MARGIN, y, "Exit", ID_EXIT_BUTTON);
}

unsafe fn create_label(
    hwnd: HWND,
    instance: windows::Win32::Foundation::HINSTANCE,
    x: i32,
    y: i32,
    text: &str,
) {
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let _ = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("STATIC"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE,
        x,
        y,
        BUTTON_WIDTH,
        20,
        Some(hwnd),
        None,
        Some(instance),
        None,
    );
}

unsafe fn create_button(
    hwnd: HWND,
    instance: windows::Win32::Foundation::HINSTANCE,
    x: i32,
    y: i32,
    text: &str,
    id: i32,
) {
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let _ = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("BUTTON"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        x,
        y,
        BUTTON_WIDTH,
        28,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(instance),
        None,
    );
}

// The color picker and info box run modal loops that keep dispatching the
// overlay's messages, and a hotkey handled there may destroy this panel
// (freeing its context) before the dialog returns. So: copy what the dialog
// needs out of the context first, and look the context up again afterwards.
unsafe fn handle_command(hwnd: HWND, control_id: i32) {
    match control_id {
        ID_FILL_BUTTON => {
            let Some((publisher, initial)) =
                panel_context(hwnd).map(|c| (c.publisher.clone(), c.fill.get()))
            else {
                return;
            };
            if let Some(color) = pick_color(hwnd, initial) {
                if let Some(ctx) = panel_context(hwnd) {
                    ctx.fill.set(color);
                }
                publisher.publish(ControlEvent::SetFillColor(color));
            }
        }
        ID_RING_BUTTON => {
            let Some((publisher, initial)) =
                panel_context(hwnd).map(|c| (c.publisher.clone(), c.ring.get()))
            else {
                return;
            };
            if let Some(color) = pick_color(hwnd, initial) {
                if let Some(ctx) = panel_context(hwnd) {
                    ctx.ring.set(color);
                }
                publisher.publish(ControlEvent::SetRingColor(color));
            }
        }
        ID_INFO_BUTTON => {
            show_info_box(hwnd);
        }
        ID_EXIT_BUTTON => {
            if let Some(ctx) = panel_context(hwnd) {
                ctx.publisher.publish(ControlEvent::Exit);
            }
        }
        _ => {}
    }
}

/// Open the stock color dialog seeded with `initial`.
unsafe fn pick_color(owner: HWND, initial: Rgb) -> Option<Rgb> {
    let mut custom_colors = [COLORREF(0x00FF_FFFF); 16];

    let mut cc = CHOOSECOLORW {
        lStructSize: std::mem::size_of::<CHOOSECOLORW>() as u32,
        hwndOwner: owner,
        rgbResult: colorref(initial),
        lpCustColors: custom_colors.as_mut_ptr(),
        Flags: CC_FULLOPEN | CC_RGBINIT,
        ..Default::default()
    };

    if ChooseColorW(&mut cc).as_bool() {
        Some(rgb_from_colorref(cc.rgbResult))
    } else {
        None
    }
}

unsafe fn show_info_box(hwnd: HWND) {
    let title = "About dotlight";
    let message = format!(
        "dotlight v{}\n\n\
        Click-through dot overlay that follows\n\
        the mouse cursor.\n\n\
        Ctrl+Alt+D: show/hide the dot\n\
        Ctrl+Alt+S: open/close this panel\n\n\
        Apache-2.0 License",
        VERSION
    );

    let title_wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();
    let message_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();

    let _ = MessageBoxW(
        Some(hwnd),
        PCWSTR(message_wide.as_ptr()),
        PCWSTR(title_wide.as_ptr()),
        MB_OK | MB_ICONINFORMATION,
    );
}
