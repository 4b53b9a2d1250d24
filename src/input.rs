use glam::Vec2;
use julia_core::{InputEvent, PointerButton};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub primary_down: bool,
}

// ---------------- Pointer helpers ----------------
/// Client position relative to the canvas, in CSS pixels.
#[inline]
pub fn mouse_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// First active touch relative to the canvas, in CSS pixels.
#[inline]
pub fn touch_css_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(Vec2::new(
        touch.client_x() as f32 - rect.left() as f32,
        touch.client_y() as f32 - rect.top() as f32,
    ))
}

#[inline]
pub fn mouse_down_event(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> InputEvent {
    let pos = mouse_css_px(ev, canvas);
    InputEvent::PointerDown {
        x: pos.x as f64,
        y: pos.y as f64,
        button: PointerButton::from_dom(ev.button()),
    }
}

/// Movement deltas are always attached; the controller only uses them while
/// relative capture is active.
#[inline]
pub fn mouse_move_event(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> InputEvent {
    let pos = mouse_css_px(ev, canvas);
    InputEvent::PointerMove {
        x: pos.x as f64,
        y: pos.y as f64,
        delta: Some((ev.movement_x() as f64, ev.movement_y() as f64)),
    }
}

#[inline]
pub fn mouse_up_event(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::PointerUp {
        button: PointerButton::from_dom(ev.button()),
    }
}
