//! Dot rasterization of one contour.

use crate::config::{ContourConfig, PerfScale};
use crate::constants::*;
use crate::snapshot::FrameSnapshot;
use crate::surface::{DrawSurface, Rgba, SurfaceError};
use crate::wave::sample_y;
use thiserror::Error;

/// A primary dot, already placed and sized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContourDot {
    /// Index among the sampled points of this pass (0, 1, 2, ...).
    pub sample: usize,
    pub x: f32,
    /// Sampled contour y before wobble and lift.
    pub y: f32,
    /// Centre y of the drawn square.
    pub draw_y: f32,
    pub influence: f32,
    /// Breathing term in `[0, 1]`.
    pub breath: f32,
    pub size: f32,
    pub alpha: f32,
}

/// Smaller companion dot drawn under every second sample of dense contours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecondaryDot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub alpha: f32,
}

impl ContourDot {
    pub fn secondary(&self, snap: &FrameSnapshot) -> SecondaryDot {
        SecondaryDot {
            x: self.x,
            y: self.draw_y + snap.device_compensate(SECONDARY_DROP),
            size: self.size * SECONDARY_SIZE_MUL,
            alpha: (SECONDARY_ALPHA_BASE + self.influence * SECONDARY_ALPHA_INFLUENCE)
                * SECONDARY_ALPHA_MUL,
        }
    }
}

/// Primary dots of `contour` for this frame, left to right.
pub fn contour_dots<'a>(
    contour: &'a ContourConfig,
    snap: &'a FrameSnapshot,
    perf: PerfScale,
) -> impl Iterator<Item = ContourDot> + 'a {
    let segments = perf.segment_count();
    let step = perf.sample_step(contour.sample_step);
    let seg_div = segments.max(1) as f32;
    (0..=segments)
        .step_by(step)
        .enumerate()
        .map(move |(sample, i)| {
            let ratio = i as f32 / seg_div;
            let x = ratio * snap.surface.width;
            place_dot(contour, snap, sample, ratio, x)
        })
}

fn place_dot(
    contour: &ContourConfig,
    snap: &FrameSnapshot,
    sample: usize,
    ratio: f32,
    x: f32,
) -> ContourDot {
    let y = sample_y(contour, x, snap);
    let inf = snap.influence_at(x, y);

    let breath = ((snap.phase(BREATH_TIME_RATE)
        + ratio * BREATH_FREQ
        + contour.vertical_offset_ratio * BREATH_PHASE_PER_OFFSET)
        .sin()
        + 1.0)
        * 0.5;

    let size = snap.device_compensate(contour.base_dot_size)
        + breath * snap.device_compensate(contour.dot_size_jitter)
        + inf * snap.device_compensate(DOT_INFLUENCE_GROWTH);

    let wobble = inf
        * (snap.phase(WOBBLE_TIME_RATE)
            + ratio * WOBBLE_FREQ
            + contour.frequency * WOBBLE_PHASE_PER_FREQ)
            .sin()
        * snap.device_compensate(WOBBLE_AMP);

    ContourDot {
        sample,
        x,
        y,
        draw_y: y + wobble - snap.device_compensate(DOT_LIFT),
        influence: inf,
        breath,
        size,
        alpha: DOT_ALPHA_BASE + inf * DOT_ALPHA_INFLUENCE,
    }
}

#[inline]
fn fill_square(
    out: &mut impl DrawSurface,
    cx: f32,
    cy: f32,
    size: f32,
    color: Rgba,
) -> Result<(), SurfaceError> {
    out.fill_rect(cx - size * 0.5, cy - size * 0.5, size, size, color)
}

/// A contour that stopped partway; `drawn` fills already reached the surface.
#[derive(Debug, Error, PartialEq)]
#[error("stopped after {drawn} dots: {source}")]
pub struct ContourFault {
    pub drawn: usize,
    #[source]
    pub source: SurfaceError,
}

/// Draw one contour. Stops at the first surface fault and returns it; the
/// caller decides whether the rest of the frame carries on.
pub fn render_contour(
    out: &mut impl DrawSurface,
    contour: &ContourConfig,
    snap: &FrameSnapshot,
    perf: PerfScale,
    ink: Rgba,
) -> Result<usize, ContourFault> {
    let dense = contour.is_dense();
    let mut drawn = 0;
    for dot in contour_dots(contour, snap, perf) {
        fill_square(out, dot.x, dot.draw_y, dot.size, ink.with_alpha(dot.alpha))
            .map_err(|source| ContourFault { drawn, source })?;
        drawn += 1;
        if dense && dot.sample % 2 == 0 {
            let s = dot.secondary(snap);
            fill_square(out, s.x, s.y, s.size, ink.with_alpha(s.alpha))
                .map_err(|source| ContourFault { drawn, source })?;
            drawn += 1;
        }
    }
    Ok(drawn)
}
