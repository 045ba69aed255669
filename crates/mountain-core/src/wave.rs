//! Vertical position of a contour at a given x.
//!
//! Four additive terms over the contour baseline: a slow edge-tapered swell,
//! a faster per-contour jitter, pointer-scaled ambient noise, and a warp/bend
//! pair that only acts near the pointer. Pure function of its inputs.

use crate::config::ContourConfig;
use crate::constants::*;
use crate::snapshot::FrameSnapshot;
use std::f32::consts::PI;

/// The individual terms of one sample, summed by [`WaveTerms::y`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveTerms {
    pub base_y: f32,
    pub swell: f32,
    pub jitter: f32,
    pub noise: f32,
    pub warp: f32,
    pub bend: f32,
}

impl WaveTerms {
    #[inline]
    pub fn y(&self) -> f32 {
        self.base_y + self.swell + self.jitter + self.noise + self.warp + self.bend
    }
}

/// Swell envelope: full at the left edge, 0.6 mid-screen, 0.2 at the right edge.
#[inline]
pub fn swell_envelope(ratio: f32) -> f32 {
    SWELL_ENVELOPE_BASE + SWELL_ENVELOPE_SPAN * (ratio * PI).cos()
}

pub fn wave_terms(contour: &ContourConfig, x: f32, snap: &FrameSnapshot) -> WaveTerms {
    let amp = contour.amplitude;
    let freq = contour.frequency;
    let offset = contour.vertical_offset_ratio;
    let pointer_x = snap.pointer.x;

    let base_y = snap.surface.height * offset;
    let ratio = x / snap.surface.safe_width();

    let swell = (ratio * PI * (freq * SWELL_FREQ_MUL)
        + snap.phase(SWELL_TIME_RATE)
        + pointer_x * SWELL_POINTER_NUDGE)
        .sin()
        * (amp * SWELL_AMP_MUL * swell_envelope(ratio));

    let jitter = (ratio * PI * (freq * JITTER_FREQ_MUL)
        + snap.phase(JITTER_TIME_RATE)
        + offset * JITTER_PHASE_PER_OFFSET)
        .sin()
        * (amp * JITTER_AMP_MUL);

    let noise_scale = NOISE_SCALE_BASE + pointer_x * NOISE_SCALE_POINTER;
    let noise = (ratio * NOISE_FREQ
        + snap.phase(NOISE_TIME_RATE)
        + offset * NOISE_PHASE_PER_OFFSET)
        .sin()
        * noise_scale
        * NOISE_AMP_MUL;

    let inf = snap.influence_at(x, base_y);
    let warp = inf * (snap.phase(WARP_TIME_RATE) + ratio * WARP_FREQ).sin() * (amp * WARP_AMP_MUL);
    let bend = inf * (snap.phase(BEND_TIME_RATE) + ratio * BEND_FREQ).sin() * (amp * BEND_AMP_MUL);

    WaveTerms {
        base_y,
        swell,
        jitter,
        noise,
        warp,
        bend,
    }
}

/// Contour y at `x`, in logical surface pixels.
#[inline]
pub fn sample_y(contour: &ContourConfig, x: f32, snap: &FrameSnapshot) -> f32 {
    wave_terms(contour, x, snap).y()
}
