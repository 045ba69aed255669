use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer anywhere on the page; the field normalizes it against
/// the canvas rect, so hovering outside still steers the nearest edge.
pub fn wire_pointermove(frame_ctx: Rc<RefCell<FrameContext>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.pointer_move(&ev),
            Err(_) => log::debug!("[pointer] frame busy, event dropped"),
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
