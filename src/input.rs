use web_sys as web;

/// Backing-store size for a canvas of `css_w` x `css_h` at `dpr`, never 0.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let w = (css_w * dpr).floor().max(1.0) as u32;
    let h = (css_h * dpr).floor().max(1.0) as u32;
    (w, h)
}

/// Browsers may report 0 or NaN while a window is being torn down.
#[inline]
pub fn effective_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        1.0
    }
}

/// Client point normalized against a bounding rect, clamped to `[0, 1]`.
/// A collapsed rect axis divides by 1.
#[inline]
pub fn normalize_in_rect(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> [f32; 2] {
    let w = if width != 0.0 { width } else { 1.0 };
    let h = if height != 0.0 { height } else { 1.0 };
    let u = ((client_x - left) / w).clamp(0.0, 1.0);
    let v = ((client_y - top) / h).clamp(0.0, 1.0);
    [u as f32, v as f32]
}

#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    normalize_in_rect(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}
