//! Free-floating particles drifting along the contours.
//!
//! The pool is sized once per surface geometry and only ever rebuilt whole;
//! steady-state ticks move particles but never add or remove them.

use crate::config::ContourConfig;
use crate::constants::*;
use crate::snapshot::FrameSnapshot;
use crate::surface::{DrawSurface, Rgba};
use crate::wave::sample_y;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub contour_index: usize,
    pub phase: f32,
    pub drift_amplitude: f32,
    pub speed_px_per_sec: f32,
    pub size: f32,
}

impl Particle {
    pub fn random(rng: &mut impl Rng, surface_width: f32, contour_count: usize) -> Self {
        let w = if surface_width > 0.0 { surface_width } else { 1.0 };
        Self {
            x: rng.gen::<f32>() * w,
            contour_index: rng.gen_range(0..contour_count.max(1)),
            phase: rng.gen::<f32>() * TAU,
            drift_amplitude: PARTICLE_DRIFT_MIN + rng.gen::<f32>() * PARTICLE_DRIFT_SPAN,
            speed_px_per_sec: PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN,
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
        }
    }

    /// Phase advance per second; faster particles bob faster.
    #[inline]
    pub fn phase_rate(&self) -> f32 {
        PARTICLE_PHASE_RATE_BASE
            + (self.speed_px_per_sec / PARTICLE_PHASE_RATE_SPEED_REF) * PARTICLE_PHASE_RATE_SPEED_MUL
    }

    /// Move right by `speed * dt`, recycling to `-margin` past the right edge.
    pub fn advance(&mut self, delta_sec: f32, surface_width: f32, wrap_margin: f32) {
        self.x += self.speed_px_per_sec * delta_sec;
        if self.x > surface_width + wrap_margin {
            self.x = -wrap_margin;
        }
        self.phase += self.phase_rate() * delta_sec;
    }

    /// Where and how to draw this particle against its home contour.
    pub fn appearance(&self, contour: &ContourConfig, snap: &FrameSnapshot) -> ParticleDot {
        let home_y = sample_y(contour, self.x, snap);
        let inf = snap.influence_at(self.x, home_y);
        let float = (self.phase + self.x * PARTICLE_FLOAT_FREQ).sin() * self.drift_amplitude;
        let energize = inf
            * (snap.phase(PARTICLE_ENERGIZE_TIME_RATE) + self.phase).sin()
            * PARTICLE_ENERGIZE_AMP;
        ParticleDot {
            x: self.x,
            y: home_y + float + energize,
            influence: inf,
            size: snap.device_compensate(self.size)
                + inf * snap.device_compensate(PARTICLE_INFLUENCE_GROWTH),
            alpha: PARTICLE_ALPHA_BASE + inf * PARTICLE_ALPHA_INFLUENCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDot {
    pub x: f32,
    pub y: f32,
    pub influence: f32,
    pub size: f32,
    pub alpha: f32,
}

/// Outcome of one particle pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticlePass {
    pub drawn: usize,
    pub faults: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every particle and populate `count` fresh ones.
    pub fn reinitialize(
        &mut self,
        rng: &mut impl Rng,
        count: usize,
        surface_width: f32,
        contour_count: usize,
    ) {
        self.particles.clear();
        self.particles.reserve(count);
        self.particles
            .extend((0..count).map(|_| Particle::random(rng, surface_width, contour_count)));
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Advance every particle by `delta_sec` and draw it. A particle whose
    /// draw fails is counted and skipped; the rest still draw.
    pub fn advance_and_render(
        &mut self,
        out: &mut impl DrawSurface,
        contours: &[ContourConfig],
        snap: &FrameSnapshot,
        delta_sec: f32,
        wrap_margin: f32,
        ink: Rgba,
    ) -> ParticlePass {
        let mut pass = ParticlePass::default();
        for p in &mut self.particles {
            p.advance(delta_sec, snap.surface.width, wrap_margin);
            let Some(contour) = contours.get(p.contour_index) else {
                pass.faults += 1;
                continue;
            };
            let dot = p.appearance(contour, snap);
            let half = dot.size * 0.5;
            match out.fill_rect(
                dot.x - half,
                dot.y - half,
                dot.size,
                dot.size,
                ink.with_alpha(dot.alpha),
            ) {
                Ok(()) => pass.drawn += 1,
                Err(_) => pass.faults += 1,
            }
        }
        pass
    }
}
