use mountain_core::{check_rect, DrawSurface, Rgba, SurfaceError, SurfaceState};
use wasm_bindgen::JsValue;
use web_sys as web;

/// `DrawSurface` backed by the page's 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Map logical (CSS) pixels onto the backing store. Must be re-applied
    /// after every backing-store resize, which resets the context.
    pub fn apply_device_transform(&self, dpr: f64) -> Result<(), JsValue> {
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        // square dots stay crisp
        self.ctx.set_image_smoothing_enabled(false);
        Ok(())
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, surface: &SurfaceState) {
        self.ctx
            .clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
    ) -> Result<(), SurfaceError> {
        check_rect(x, y, w, h)?;
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }
}
