#![cfg(target_arch = "wasm32")]
use mountain_core::{FieldConfig, MountainField, PerfScale};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod schedule;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mountain-web starting");

    // The field is decoration: if the page has no canvas for it, or no 2D
    // context, the rest of the page must keep working.
    if let Err(e) = init() {
        log::info!("[init] mountain field disabled: {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop. Further calls are no-ops.
#[wasm_bindgen]
pub fn stop_mountains() {
    frame::request_stop();
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document, constants::CANVAS_SELECTOR)?;
    let surface = canvas::CanvasSurface::new(dom::context_2d(&canvas)?);

    // Sampled once; the session keeps this density even if input devices change.
    let perf = PerfScale::from_coarse_pointer(dom::prefers_coarse_pointer(&window));
    let mut field = MountainField::new(FieldConfig::default(), perf)?;

    let geometry = dom::sync_canvas_backing_size(&canvas, &surface)?;
    let mut rng = SmallRng::from_entropy();
    field.start(geometry, instant::now(), &mut rng);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface,
        canvas,
        rng,
    }));

    events::wire_resize(frame_ctx.clone());
    events::wire_pointermove(frame_ctx.clone());

    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
