use crate::constants::DPR_COMPENSATION_CAP;
use thiserror::Error;

/// Logical surface geometry, recomputed on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl SurfaceState {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: sane(width),
            height: sane(height),
            device_pixel_ratio: dpr,
        }
    }

    /// Width used as a divisor; a collapsed surface divides by 1.
    #[inline]
    pub fn safe_width(&self) -> f32 {
        if self.width > 0.0 {
            self.width
        } else {
            1.0
        }
    }

    /// Scale a logical size down on dense displays so dots don't look heavy.
    #[inline]
    pub fn device_compensate(&self, v: f32) -> f32 {
        device_compensate(v, self.device_pixel_ratio)
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// `v / min(2, dpr)`
#[inline]
pub fn device_compensate(v: f32, device_pixel_ratio: f32) -> f32 {
    let dpr = if device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    v * (1.0 / dpr.min(DPR_COMPENSATION_CAP))
}

/// Straight (non-premultiplied) colour with a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` notation for canvas fill styles.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("non-finite rect ({x}, {y}, {w}, {h})")]
    NonFiniteRect { x: f32, y: f32, w: f32, h: f32 },
    #[error("surface backend: {0}")]
    Backend(String),
}

/// Check rect geometry before it reaches a backend.
pub fn check_rect(x: f32, y: f32, w: f32, h: f32) -> Result<(), SurfaceError> {
    if x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite() {
        Ok(())
    } else {
        Err(SurfaceError::NonFiniteRect { x, y, w, h })
    }
}

/// The drawing primitives the field needs from its host.
///
/// Coordinates are logical (CSS) pixels; implementations own the mapping to
/// physical pixels for the current device pixel ratio.
pub trait DrawSurface {
    fn clear(&mut self, surface: &SurfaceState);
    fn set_global_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba)
        -> Result<(), SurfaceError>;
}

/// One recorded fill, with the global alpha in effect at the time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillCall {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgba,
    pub global_alpha: f32,
}

impl FillCall {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// Surface that remembers what was drawn instead of rasterizing it.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub fills: Vec<FillCall>,
    pub clears: usize,
    global_alpha: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            fills: Vec::new(),
            clears: 0,
            global_alpha: 1.0,
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global_alpha(&self) -> f32 {
        self.global_alpha
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, _surface: &SurfaceState) {
        self.fills.clear();
        self.clears += 1;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha;
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
        self.fills.push(FillCall {
            x,
            y,
            w,
            h,
            color,
            global_alpha: self.global_alpha,
        });
        Ok(())
    }
}
