//! Frame driver: the single mutable animation state and its per-tick pass.

use crate::config::{ConfigError, FieldConfig, PerfScale};
use crate::contour::render_contour;
use crate::idle::IdleOrbit;
use crate::influence::{clamp01, PointerState};
use crate::particles::{ParticlePass, ParticlePool};
use crate::snapshot::FrameSnapshot;
use crate::surface::{DrawSurface, SurfaceState};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Uninitialized,
    Running,
    Stopped,
}

/// What the last tick managed to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub contour_dots: usize,
    pub contour_faults: usize,
    pub particles: ParticlePass,
    pub idle_pointer: bool,
}

pub struct MountainField {
    config: FieldConfig,
    perf: PerfScale,
    idle: IdleOrbit,
    surface: SurfaceState,
    pointer: PointerState,
    particles: ParticlePool,
    state: RunState,
    last_timestamp_ms: Option<f64>,
    last_report: FrameReport,
}

impl MountainField {
    pub fn new(config: FieldConfig, perf: PerfScale) -> Result<Self, ConfigError> {
        config.validate()?;
        let idle = IdleOrbit {
            threshold_ms: config.idle_threshold_ms,
            amp: config.idle_orbit_amp,
            rate: config.idle_orbit_rate,
        };
        Ok(Self {
            config,
            perf,
            idle,
            surface: SurfaceState::default(),
            pointer: PointerState::default(),
            particles: ParticlePool::new(),
            state: RunState::Uninitialized,
            last_timestamp_ms: None,
            last_report: FrameReport::default(),
        })
    }

    /// Size the surface and fill the particle pool. Only the first call on an
    /// uninitialized field does anything; returns whether it did.
    pub fn start(&mut self, surface: SurfaceState, now_ms: f64, rng: &mut impl Rng) -> bool {
        if self.state != RunState::Uninitialized {
            return false;
        }
        self.pointer.last_real_update_ms = now_ms;
        self.resize(surface, rng);
        self.state = RunState::Running;
        log::info!(
            "[field] start contours={} particles={} perf={:.2}",
            self.config.contours.len(),
            self.particles.len(),
            self.perf.value()
        );
        true
    }

    /// Adopt new surface geometry and rebuild the whole particle pool.
    pub fn resize(&mut self, surface: SurfaceState, rng: &mut impl Rng) {
        self.surface = surface;
        let count = self.perf.particle_count(self.config.particle_base_count);
        self.particles
            .reinitialize(rng, count, surface.width, self.config.contours.len());
        log::debug!(
            "[resize] {:.0}x{:.0} dpr={:.2} particles={}",
            surface.width,
            surface.height,
            surface.device_pixel_ratio,
            count
        );
    }

    /// Real pointer input, normalized to the surface. Non-finite positions are
    /// dropped; returns whether the pointer was updated.
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        self.pointer.x = clamp01(x);
        self.pointer.y = clamp01(y);
        self.pointer.last_real_update_ms = now_ms;
        true
    }

    /// Stop scheduling. Idempotent; returns whether this call did the stopping.
    pub fn stop(&mut self) -> bool {
        if self.state == RunState::Stopped {
            return false;
        }
        self.state = RunState::Stopped;
        log::info!("[field] stopped");
        true
    }

    /// Draw one frame at host timestamp `timestamp_ms`. Returns whether the
    /// host should schedule another tick.
    pub fn tick(&mut self, timestamp_ms: f64, out: &mut impl DrawSurface) -> bool {
        match self.state {
            RunState::Running => {}
            RunState::Uninitialized | RunState::Stopped => return false,
        }
        if !timestamp_ms.is_finite() {
            return true;
        }

        let delta_sec = self.delta_sec(timestamp_ms);
        self.last_timestamp_ms = Some(timestamp_ms);

        let idle_pointer = self.idle.apply(&mut self.pointer, timestamp_ms);
        let snap = self.snapshot(timestamp_ms / 1000.0);
        let ink = self.config.ink;

        out.clear(&snap.surface);

        let mut report = FrameReport {
            idle_pointer,
            ..FrameReport::default()
        };

        out.set_global_alpha(self.config.contour_layer_alpha);
        for (i, contour) in self.config.contours.iter().enumerate() {
            match render_contour(out, contour, &snap, self.perf, ink) {
                Ok(n) => report.contour_dots += n,
                Err(e) => {
                    report.contour_dots += e.drawn;
                    report.contour_faults += 1;
                    log::warn!("[field] contour {} skipped: {}", i, e);
                }
            }
        }

        out.set_global_alpha(self.config.particle_layer_alpha);
        report.particles = self.particles.advance_and_render(
            out,
            &self.config.contours,
            &snap,
            delta_sec,
            self.config.particle_wrap_margin,
            ink,
        );
        out.set_global_alpha(1.0);
        if report.particles.faults > 0 {
            log::warn!(
                "[field] {} of {} particles failed to draw",
                report.particles.faults,
                self.particles.len()
            );
        }

        self.last_report = report;
        true
    }

    /// Frame delta in seconds, clamped to `[0, max_delta]`. The first tick
    /// and any backwards step in time yield 0.
    fn delta_sec(&self, timestamp_ms: f64) -> f32 {
        let last = self.last_timestamp_ms.unwrap_or(timestamp_ms);
        let dt = ((timestamp_ms - last) / 1000.0) as f32;
        dt.clamp(0.0, self.config.max_delta_sec)
    }

    /// Immutable view of the current state for a draw pass at `elapsed_sec`.
    pub fn snapshot(&self, elapsed_sec: f64) -> FrameSnapshot {
        FrameSnapshot {
            elapsed_sec,
            pointer: self.pointer,
            surface: self.surface,
            influence_radius: self.config.influence_radius,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn perf(&self) -> PerfScale {
        self.perf
    }

    pub fn idle_orbit(&self) -> &IdleOrbit {
        &self.idle
    }

    pub fn surface(&self) -> SurfaceState {
        self.surface
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut ParticlePool {
        &mut self.particles
    }

    pub fn last_report(&self) -> FrameReport {
        self.last_report
    }
}
