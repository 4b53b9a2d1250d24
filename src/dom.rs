use julia_core::{ViewportGeometry, ViewportSource};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        if w_px.max(1) != canvas.width() || h_px.max(1) != canvas.height() {
            canvas.set_width(w_px.max(1));
            canvas.set_height(h_px.max(1));
        }
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        // Late stylesheets can size the canvas after the first resize pass.
        _ = window.add_event_listener_with_callback("load", resize_closure.as_ref().unchecked_ref());
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Live canvas geometry, read from the DOM on every call.
pub struct CanvasViewport<'a> {
    canvas: &'a web::HtmlCanvasElement,
}

impl<'a> CanvasViewport<'a> {
    pub fn new(canvas: &'a web::HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ViewportSource for CanvasViewport<'_> {
    fn geometry(&self) -> ViewportGeometry {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        // Unstyled canvases report 0; mapping needs a realized viewport.
        ViewportGeometry::new(
            self.canvas.client_width().max(1) as f64,
            self.canvas.client_height().max(1) as f64,
            dpr,
        )
    }
}

/// Current `location.hash` without the leading `#`.
pub fn read_fragment() -> String {
    web::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

pub fn write_fragment(fragment: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_hash(fragment) {
            log::warn!("[url] could not write fragment: {:?}", e);
        }
    }
}

#[inline]
pub fn supports_pointer_lock(document: &web::Document) -> bool {
    js_sys::Reflect::has(document, &"exitPointerLock".into()).unwrap_or(false)
}
