use crate::influence::PointerState;

/// Synthetic pointer that slowly orbits the surface centre while real input
/// is quiet, so the field never settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleOrbit {
    pub threshold_ms: f64,
    pub amp: [f32; 2],
    pub rate: [f64; 2],
}

impl IdleOrbit {
    /// Normalized orbit position at wall-clock `now_ms`.
    pub fn position(&self, now_ms: f64) -> (f32, f32) {
        let x = 0.5 + self.amp[0] * (now_ms * self.rate[0]).sin() as f32;
        let y = 0.5 + self.amp[1] * (now_ms * self.rate[1]).cos() as f32;
        (x, y)
    }

    /// Whether real input is stale enough for the orbit to take over.
    #[inline]
    pub fn is_idle(&self, pointer: &PointerState, now_ms: f64) -> bool {
        now_ms - pointer.last_real_update_ms > self.threshold_ms
    }

    /// Overwrite the pointer with the orbit if idle. The real-input timestamp
    /// is left alone, so the next real move takes over again immediately.
    pub fn apply(&self, pointer: &mut PointerState, now_ms: f64) -> bool {
        if !self.is_idle(pointer, now_ms) {
            return false;
        }
        let (x, y) = self.position(now_ms);
        pointer.x = x;
        pointer.y = y;
        true
    }
}
