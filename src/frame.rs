use crate::canvas::CanvasSurface;
use crate::dom;
use crate::input;
use crate::schedule::CallbackSlot;
use mountain_core::MountainField;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

static STOP_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Ask the running loop to wind down at its next tick. Safe to call repeatedly.
pub fn request_stop() {
    STOP_REQUESTED.store(true, Ordering::SeqCst);
}

pub struct FrameContext {
    pub field: MountainField,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub rng: SmallRng,
}

impl FrameContext {
    /// One animation tick; returns whether to request another frame.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if STOP_REQUESTED.load(Ordering::SeqCst) {
            self.field.stop();
        }
        self.field.tick(timestamp_ms, &mut self.surface)
    }

    pub fn resize(&mut self) {
        match dom::sync_canvas_backing_size(&self.canvas, &self.surface) {
            Ok(state) => self.field.resize(state, &mut self.rng),
            Err(e) => log::warn!("[resize] {:?}", e),
        }
    }

    pub fn pointer_move(&mut self, ev: &web::PointerEvent) {
        let [u, v] = input::pointer_canvas_uv(ev, &self.canvas);
        self.field.pointer_move(u, v, instant::now());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: CallbackSlot<Closure<dyn FnMut(f64)>> = CallbackSlot::new();
    let tick_clone = tick.clone();
    tick.set(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        let again = frame_ctx.borrow_mut().frame(timestamp_ms);
        if !again {
            log::info!("[frame] loop ended");
            drop(tick_clone.release());
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &CallbackSlot<Closure<dyn FnMut(f64)>>) {
    if let Some(w) = web::window() {
        _ = tick.with(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()));
    }
}
