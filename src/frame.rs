use crate::dom;
use crate::render;
use instant::Instant;
use julia_core::{FrameDriver, InteractionStateMachine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub machine: Rc<RefCell<InteractionStateMachine>>,
    pub driver: FrameDriver,
    pub canvas: web::HtmlCanvasElement,
    /// Filled in once WebGPU initialization finishes.
    pub gpu: Rc<RefCell<Option<render::GpuState<'static>>>>,
    pub start_instant: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;
        let elapsed_sec = (now - self.start_instant).as_secs_f64();

        let viewport = dom::CanvasViewport::new(&self.canvas);
        let mut gpu = self.gpu.borrow_mut();
        if let Some(g) = gpu.as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
        }
        let machine = self.machine.borrow();
        self.driver
            .tick(dt_sec, elapsed_sec, &machine, &viewport, gpu.as_mut());
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
