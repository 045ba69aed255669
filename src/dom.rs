use crate::canvas::CanvasSurface;
use crate::constants::COARSE_POINTER_QUERY;
use crate::input;
use mountain_core::SurfaceState;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("{} is not a canvas", selector))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Touch-first devices report a coarse primary pointer.
pub fn prefers_coarse_pointer(window: &web::Window) -> bool {
    window
        .match_media(COARSE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Resize the backing store to CSS size * devicePixelRatio, restore the
/// logical transform, and report the new logical geometry.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    surface: &CanvasSurface,
) -> anyhow::Result<SurfaceState> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let dpr = input::effective_dpr(window.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    surface
        .apply_device_transform(dpr)
        .map_err(|e| anyhow::anyhow!("set_transform error: {:?}", e))?;
    Ok(SurfaceState::new(
        rect.width() as f32,
        rect.height() as f32,
        dpr as f32,
    ))
}
