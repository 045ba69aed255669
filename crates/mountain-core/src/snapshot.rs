use crate::influence::{influence, PointerState};
use crate::surface::SurfaceState;
use glam::Vec2;
use std::f64::consts::TAU;

/// Read-only view of the field for one draw pass.
///
/// Taken once at the start of a tick so input arriving mid-frame can't tear
/// the pointer or surface between contours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    /// Host clock in seconds. Kept wide so phases stay smooth on pages left
    /// open for days.
    pub elapsed_sec: f64,
    pub pointer: PointerState,
    pub surface: SurfaceState,
    pub influence_radius: f32,
}

impl FrameSnapshot {
    /// `elapsed_sec * rate` reduced to `[0, 2π)`, taken in `f64` before
    /// narrowing.
    #[inline]
    pub fn phase(&self, rate: f32) -> f32 {
        (self.elapsed_sec * rate as f64).rem_euclid(TAU) as f32
    }

    #[inline]
    pub fn influence_at(&self, x: f32, y: f32) -> f32 {
        influence(Vec2::new(x, y), &self.pointer, &self.surface, self.influence_radius)
    }

    #[inline]
    pub fn device_compensate(&self, v: f32) -> f32 {
        self.surface.device_compensate(v)
    }
}
