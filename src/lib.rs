#![cfg(target_arch = "wasm32")]
use instant::Instant;
use julia_core::{FrameDriver, InteractionStateMachine, ViewConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("julia-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing <canvas>"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = ViewConfig::default();
    let relative_motion = dom::supports_pointer_lock(&document);
    log::info!(
        "[init] zoom={} offset=({}, {}) pointer_lock={}",
        config.zoom,
        config.offset.re,
        config.offset.im,
        relative_motion
    );

    // ---------------- Interaction state ----------------
    let machine = Rc::new(RefCell::new(InteractionStateMachine::new(
        config,
        relative_motion,
    )));
    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        machine: machine.clone(),
        mouse_state: Rc::new(RefCell::new(input::MouseState::default())),
    };
    events::wire_input_handlers(&wiring);
    events::wire_navigation(&wiring);
    events::restore_from_fragment(&wiring);

    // The loop runs before the GPU is ready; ticks without a renderer only
    // keep time.
    let gpu = Rc::new(RefCell::new(None));
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        machine,
        driver: FrameDriver::new(&config),
        canvas: canvas.clone(),
        gpu: gpu.clone(),
        start_instant: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    let state = frame::init_gpu(&canvas).await;
    *gpu.borrow_mut() = state;
    Ok(())
}
