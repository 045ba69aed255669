//! Software RGBA surface.
//!
//! Mirrors what the browser canvas does for the field: a device-pixel-ratio
//! transform, clipping to the backing store and source-over blending. Useful
//! for headless rendering and for asserting on actual pixels in tests.

use crate::surface::{check_rect, DrawSurface, Rgba, SurfaceError, SurfaceState};

#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    scale: f32,
    global_alpha: f32,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Backing store sized `max(1, floor(logical * dpr))` on each axis.
    pub fn for_surface(surface: &SurfaceState) -> Self {
        let dpr = surface.device_pixel_ratio;
        let width = ((surface.width * dpr).floor() as usize).max(1);
        let height = ((surface.height * dpr).floor() as usize).max(1);
        Self {
            width,
            height,
            scale: dpr,
            global_alpha: 1.0,
            pixels: vec![[0; 4]; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Physical pixel at `(x, y)`, if inside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Raw RGBA bytes ready for `ImageData`.
    pub fn as_rgba(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Count of pixels with any coverage.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p[3] > 0).count()
    }

    fn blend(dst: &mut [u8; 4], color: Rgba, alpha: f32) {
        let sa = alpha.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: u8, d: u8| -> u8 {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        dst[0] = mix(color.r, dst[0]);
        dst[1] = mix(color.g, dst[1]);
        dst[2] = mix(color.b, dst[2]);
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

impl DrawSurface for PixelBuffer {
    fn clear(&mut self, _surface: &SurfaceState) {
        self.pixels.fill([0; 4]);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
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
        // canvas semantics: negative extents flip the rect
        let (x0, x1) = if w < 0.0 { (x + w, x) } else { (x, x + w) };
        let (y0, y1) = if h < 0.0 { (y + h, y) } else { (y, y + h) };
        let px0 = (x0 * self.scale).round().max(0.0) as usize;
        let py0 = (y0 * self.scale).round().max(0.0) as usize;
        let px1 = ((x1 * self.scale).round().max(0.0) as usize).min(self.width);
        let py1 = ((y1 * self.scale).round().max(0.0) as usize).min(self.height);
        let alpha = color.a * self.global_alpha;
        for py in py0..py1 {
            let row = py * self.width;
            for px in px0..px1 {
                Self::blend(&mut self.pixels[row + px], color, alpha);
            }
        }
        Ok(())
    }
}
