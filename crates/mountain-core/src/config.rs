//! Static field configuration.
//!
//! A [`FieldConfig`] is built once at startup and never mutated afterwards;
//! the frame driver owns it and lends contours out by reference.

use crate::constants::*;
use crate::surface::Rgba;
use thiserror::Error;

/// One wavy line of the mountain field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContourConfig {
    /// Baseline as a fraction of surface height.
    pub vertical_offset_ratio: f32,
    pub amplitude: f32,
    pub frequency: f32,
    /// Segment stride between sampled dots, before performance scaling.
    pub sample_step: usize,
    pub base_dot_size: f32,
    pub dot_size_jitter: f32,
}

impl ContourConfig {
    pub const fn new(
        vertical_offset_ratio: f32,
        amplitude: f32,
        frequency: f32,
        sample_step: usize,
        base_dot_size: f32,
        dot_size_jitter: f32,
    ) -> Self {
        Self {
            vertical_offset_ratio,
            amplitude,
            frequency,
            sample_step,
            base_dot_size,
            dot_size_jitter,
        }
    }

    /// Upper bound on `|sample_y - baseline|` for any pointer, time and x.
    pub fn max_excursion(&self) -> f32 {
        let noise = (NOISE_SCALE_BASE + NOISE_SCALE_POINTER) * NOISE_AMP_MUL;
        self.amplitude * (SWELL_AMP_MUL + JITTER_AMP_MUL + WARP_AMP_MUL + BEND_AMP_MUL) + noise
    }

    /// True when the contour also gets the smaller secondary dots.
    pub fn is_dense(&self) -> bool {
        self.sample_step <= DENSE_STEP_MAX
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let invalid = |reason: &'static str| ConfigError::InvalidContour { index, reason };
        if !(0.0..=1.0).contains(&self.vertical_offset_ratio) {
            return Err(invalid("vertical offset ratio must lie in [0, 1]"));
        }
        if !(self.amplitude.is_finite() && self.amplitude > 0.0) {
            return Err(invalid("amplitude must be positive"));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(invalid("frequency must be positive"));
        }
        if self.sample_step == 0 {
            return Err(invalid("sample step must be at least 1"));
        }
        if !(self.base_dot_size.is_finite() && self.base_dot_size > 0.0) {
            return Err(invalid("base dot size must be positive"));
        }
        if !(self.dot_size_jitter.is_finite() && self.dot_size_jitter >= 0.0) {
            return Err(invalid("dot size jitter must be non-negative"));
        }
        Ok(())
    }
}

/// Reference mountain lines, grouped top to bottom into four bands (3/2/4/2).
/// Amplitudes here are pre-swell; [`FieldConfig::default`] applies the swell.
pub const MOUNTAIN_CONTOURS: [ContourConfig; 11] = [
    // top
    ContourConfig::new(0.22, 30.0, 1.0, 8, 3.4, 1.2),
    ContourConfig::new(0.25, 34.0, 1.15, 5, 4.0, 1.6),
    ContourConfig::new(0.28, 36.0, 1.3, 8, 3.4, 1.2),
    // mid
    ContourConfig::new(0.40, 40.0, 1.6, 6, 4.1, 1.6),
    ContourConfig::new(0.44, 42.0, 1.8, 9, 3.2, 1.1),
    // lower mid
    ContourConfig::new(0.56, 40.0, 1.7, 6, 4.0, 1.6),
    ContourConfig::new(0.59, 42.0, 1.9, 9, 3.1, 1.1),
    ContourConfig::new(0.62, 40.0, 2.1, 5, 4.0, 1.7),
    ContourConfig::new(0.65, 38.0, 1.85, 9, 3.0, 1.1),
    // bottom
    ContourConfig::new(0.78, 28.0, 1.1, 6, 4.0, 1.5),
    ContourConfig::new(0.82, 26.0, 0.95, 10, 2.8, 1.0),
];

/// Band sizes of [`MOUNTAIN_CONTOURS`], top to bottom.
pub const MOUNTAIN_BANDS: [usize; 4] = [3, 2, 4, 2];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field needs at least one contour")]
    NoContours,
    #[error("contour {index}: {reason}")]
    InvalidContour { index: usize, reason: &'static str },
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be {expected}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("particle layer needs a positive base count")]
    NoParticles,
}

/// Everything tunable about the field, fixed for the session.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub contours: Vec<ContourConfig>,
    pub influence_radius: f32,
    pub idle_threshold_ms: f64,
    pub idle_orbit_amp: [f32; 2],
    pub idle_orbit_rate: [f64; 2],
    pub particle_base_count: usize,
    pub particle_wrap_margin: f32,
    pub max_delta_sec: f32,
    pub contour_layer_alpha: f32,
    pub particle_layer_alpha: f32,
    pub ink: Rgba,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let contours = MOUNTAIN_CONTOURS
            .iter()
            .map(|c| ContourConfig {
                amplitude: c.amplitude * AMPLITUDE_SWELL,
                ..*c
            })
            .collect();
        Self {
            contours,
            influence_radius: INFLUENCE_RADIUS_PX,
            idle_threshold_ms: IDLE_THRESHOLD_MS,
            idle_orbit_amp: [IDLE_ORBIT_AMP_X, IDLE_ORBIT_AMP_Y],
            idle_orbit_rate: [IDLE_ORBIT_RATE_X, IDLE_ORBIT_RATE_Y],
            particle_base_count: PARTICLE_BASE_COUNT,
            particle_wrap_margin: PARTICLE_WRAP_MARGIN_PX,
            max_delta_sec: MAX_DELTA_SEC,
            contour_layer_alpha: CONTOUR_LAYER_ALPHA,
            particle_layer_alpha: PARTICLE_LAYER_ALPHA,
            ink: Rgba::BLACK,
        }
    }
}

impl FieldConfig {
    /// Default tuning with a caller-supplied contour list.
    pub fn with_contours(contours: Vec<ContourConfig>) -> Self {
        Self {
            contours,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contours.is_empty() {
            return Err(ConfigError::NoContours);
        }
        for (i, c) in self.contours.iter().enumerate() {
            c.validate(i)?;
        }
        positive("influence radius", self.influence_radius as f64)?;
        positive("idle threshold", self.idle_threshold_ms)?;
        positive("max delta", self.max_delta_sec as f64)?;
        within("contour layer alpha", self.contour_layer_alpha as f64, UNIT)?;
        within("particle layer alpha", self.particle_layer_alpha as f64, UNIT)?;
        within("particle wrap margin", self.particle_wrap_margin as f64, NON_NEGATIVE)?;
        for amp in self.idle_orbit_amp {
            within("idle orbit amplitude", amp as f64, NON_NEGATIVE)?;
        }
        for rate in self.idle_orbit_rate {
            within("idle orbit rate", rate, FINITE)?;
        }
        if self.particle_base_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

type Bound = (&'static str, fn(f64) -> bool);

const UNIT: Bound = ("within [0, 1]", |v| (0.0..=1.0).contains(&v));
const NON_NEGATIVE: Bound = ("finite and non-negative", |v| v.is_finite() && v >= 0.0);
const FINITE: Bound = ("finite", f64::is_finite);

fn within(name: &'static str, value: f64, (expected, ok): Bound) -> Result<(), ConfigError> {
    if ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            expected,
        })
    }
}

/// Density multiplier picked once per session from the pointer precision hint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerfScale(f32);

impl PerfScale {
    pub const FULL: PerfScale = PerfScale(PERF_SCALE_FINE);

    pub fn from_coarse_pointer(coarse: bool) -> Self {
        if coarse {
            PerfScale(PERF_SCALE_COARSE)
        } else {
            PerfScale(PERF_SCALE_FINE)
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// `floor(base * scale)`, the particle pool size.
    pub fn particle_count(self, base: usize) -> usize {
        (base as f32 * self.0).floor() as usize
    }

    /// `floor(CONTOUR_SEGMENTS * scale)`, the horizontal resolution of a contour.
    pub fn segment_count(self) -> usize {
        (CONTOUR_SEGMENTS as f32 * self.0).floor() as usize
    }

    /// Sampling stride for a contour, thinned on constrained devices.
    pub fn sample_step(self, contour_step: usize) -> usize {
        ((contour_step as f32 / self.0).floor() as usize).max(MIN_SAMPLE_STEP)
    }
}

impl Default for PerfScale {
    fn default() -> Self {
        Self::FULL
    }
}
