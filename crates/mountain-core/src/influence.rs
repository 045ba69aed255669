use crate::surface::SurfaceState;
use glam::Vec2;

/// Pointer position normalized to the surface, plus when it was last moved
/// by real input (milliseconds on the host's frame clock).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub last_real_update_ms: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            last_real_update_ms: 0.0,
        }
    }
}

impl PointerState {
    /// Pointer position in logical surface pixels.
    #[inline]
    pub fn to_px(&self, surface: &SurfaceState) -> Vec2 {
        Vec2::new(self.x * surface.width, self.y * surface.height)
    }
}

#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Hermite smoothstep over `[0, 1]`, input clamped first.
#[inline]
pub fn smoothstep01(v: f32) -> f32 {
    let t = clamp01(v);
    t * t * (3.0 - 2.0 * t)
}

/// Pointer proximity in `[0, 1]`: 1 at the pointer, falling smoothly to 0 at
/// `radius` and beyond.
#[inline]
pub fn influence(point: Vec2, pointer: &PointerState, surface: &SurfaceState, radius: f32) -> f32 {
    let dist = point.distance(pointer.to_px(surface));
    1.0 - smoothstep01(dist / radius)
}
