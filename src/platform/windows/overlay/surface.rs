//! GDI render surface for the dot.
//!
//! The shape identity is the cached brush/pen pair: created once, reused on
//! every paint, replaced only when a color changes. Moving or hiding the dot
//! never re-creates them, so a re-show restores the exact prior appearance.

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreatePen, CreateSolidBrush, DeleteObject, Ellipse, EndPaint, FillRect,
    InvalidateRect, SelectObject, HBRUSH, HPEN, PAINTSTRUCT, PS_SOLID,
};

use crate::model::color::Rgb;
use crate::model::constants::RING_WIDTH;
use crate::model::indicator::IndicatorState;

use super::super::{colorref, TRANSPARENT_KEY};

/// The drawable dot hosted by the overlay window.
pub struct DotSurface {
    hwnd: HWND,
    fill_brush: HBRUSH,
    ring_pen: HPEN,
    key_brush: HBRUSH,
    center: (i32, i32),
    radius: i32,
    visible: bool,
}

impl DotSurface {
    pub fn new(hwnd: HWND, indicator: &IndicatorState) -> Self {
        let (x, y) = indicator.position();
        unsafe {
            Self {
                hwnd,
                fill_brush: CreateSolidBrush(colorref(indicator.fill)),
                ring_pen: CreatePen(PS_SOLID, RING_WIDTH, colorref(indicator.ring)),
                key_brush: CreateSolidBrush(TRANSPARENT_KEY),
                center: (x.round() as i32, y.round() as i32),
                radius: indicator.radius,
                visible: indicator.visible,
            }
        }
    }

    /// Bounding box of the dot, padded by the ring width so the outline's
    /// outer half is covered too.
    fn dot_rect(&self) -> RECT {
        let (cx, cy) = self.center;
        let reach = self.radius + RING_WIDTH;
        RECT {
            left: cx - reach,
            top: cy - reach,
            right: cx + reach,
            bottom: cy + reach,
        }
    }

    fn invalidate(&self, rect: &RECT) {
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), Some(rect), false);
        }
    }

    /// Move the dot center to (x, y). Repaints only the union of the old
    /// and new dot rectangles.
    pub fn set_position(&mut self, x: f64, y: f64) {
        let next = (x.round() as i32, y.round() as i32);
        if next == self.center {
            return;
        }
        let old = self.dot_rect();
        self.center = next;
        self.invalidate(&old);
        self.invalidate(&self.dot_rect());
    }

    /// Show or hide the dot without discarding its resources.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.invalidate(&self.dot_rect());
    }

    pub fn set_fill(&mut self, color: Rgb) {
        unsafe {
            let _ = DeleteObject(self.fill_brush.into());
            self.fill_brush = CreateSolidBrush(colorref(color));
        }
        self.invalidate(&self.dot_rect());
    }

    pub fn set_ring(&mut self, color: Rgb) {
        unsafe {
            let _ = DeleteObject(self.ring_pen.into());
            self.ring_pen = CreatePen(PS_SOLID, RING_WIDTH, colorref(color));
        }
        self.invalidate(&self.dot_rect());
    }

    /// `WM_PAINT` handler: fill the dirty region with the color key, then
    /// draw the ellipse if visible.
    pub fn paint(&mut self) {
        unsafe {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(self.hwnd, &mut ps);
            if hdc.is_invalid() {
                return;
            }

            FillRect(hdc, &ps.rcPaint, self.key_brush);

            if self.visible {
                let (cx, cy) = self.center;
                let r = self.radius;
                let old_pen = SelectObject(hdc, self.ring_pen.into());
                let old_brush = SelectObject(hdc, self.fill_brush.into());
                let _ = Ellipse(hdc, cx - r, cy - r, cx + r, cy + r);
                SelectObject(hdc, old_brush);
                SelectObject(hdc, old_pen);
            }

            let _ = EndPaint(self.hwnd, &ps);
        }
    }
}

impl Drop for DotSurface {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.fill_brush.into());
            let _ = DeleteObject(self.ring_pen.into());
            let _ = DeleteObject(self.key_brush.into());
        }
    }
}
