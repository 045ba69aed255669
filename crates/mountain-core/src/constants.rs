//! Motion and rendering tuning constants.
//!
//! These express intended behavior (radii, rates, blend weights) and keep
//! magic numbers out of the samplers and renderers.

// Pointer influence
pub const INFLUENCE_RADIUS_PX: f32 = 220.0;

// Idle pointer orbit
pub const IDLE_THRESHOLD_MS: f64 = 1600.0;
pub const IDLE_ORBIT_AMP_X: f32 = 0.18;
pub const IDLE_ORBIT_AMP_Y: f32 = 0.12;
pub const IDLE_ORBIT_RATE_X: f64 = 0.00035; // radians per ms
pub const IDLE_ORBIT_RATE_Y: f64 = 0.00028;

// Frame timing
pub const MAX_DELTA_SEC: f32 = 0.05;

// Performance scaling
pub const PERF_SCALE_COARSE: f32 = 0.72;
pub const PERF_SCALE_FINE: f32 = 1.0;

// Contour amplitude swell applied uniformly to the reference lines
pub const AMPLITUDE_SWELL: f32 = 1.25;

// Wave sampler: swell
pub const SWELL_FREQ_MUL: f32 = 0.62;
pub const SWELL_TIME_RATE: f32 = 1.35;
pub const SWELL_POINTER_NUDGE: f32 = 1.2;
pub const SWELL_AMP_MUL: f32 = 1.08;
pub const SWELL_ENVELOPE_BASE: f32 = 0.6; // envelope = base + span * cos(ratio * PI)
pub const SWELL_ENVELOPE_SPAN: f32 = 0.4;

// Wave sampler: jitter
pub const JITTER_FREQ_MUL: f32 = 3.6;
pub const JITTER_TIME_RATE: f32 = 6.8;
pub const JITTER_PHASE_PER_OFFSET: f32 = 3.2;
pub const JITTER_AMP_MUL: f32 = 0.22;

// Wave sampler: ambient noise
pub const NOISE_SCALE_BASE: f32 = 3.0;
pub const NOISE_SCALE_POINTER: f32 = 6.2;
pub const NOISE_FREQ: f32 = 10.0;
pub const NOISE_TIME_RATE: f32 = 1.3;
pub const NOISE_PHASE_PER_OFFSET: f32 = 5.0;
pub const NOISE_AMP_MUL: f32 = 0.4;

// Wave sampler: pointer-local warp and bend
pub const WARP_TIME_RATE: f32 = 9.5;
pub const WARP_FREQ: f32 = 12.0;
pub const WARP_AMP_MUL: f32 = 0.46;
pub const BEND_TIME_RATE: f32 = 3.2;
pub const BEND_FREQ: f32 = 7.2;
pub const BEND_AMP_MUL: f32 = 0.18;

// Contour rasterization
pub const CONTOUR_SEGMENTS: usize = 260;
pub const MIN_SAMPLE_STEP: usize = 3;
pub const DENSE_STEP_MAX: usize = 6; // contours at or below this step get secondary dots
pub const DPR_COMPENSATION_CAP: f32 = 2.0;
pub const BREATH_TIME_RATE: f32 = 4.2;
pub const BREATH_FREQ: f32 = 18.0;
pub const BREATH_PHASE_PER_OFFSET: f32 = 9.0;
pub const DOT_INFLUENCE_GROWTH: f32 = 2.6;
pub const WOBBLE_TIME_RATE: f32 = 10.5;
pub const WOBBLE_FREQ: f32 = 22.0;
pub const WOBBLE_PHASE_PER_FREQ: f32 = 2.0;
pub const WOBBLE_AMP: f32 = 3.2;
pub const DOT_LIFT: f32 = 2.0; // drawn slightly above the sampled y
pub const DOT_ALPHA_BASE: f32 = 0.18;
pub const DOT_ALPHA_INFLUENCE: f32 = 0.50;
pub const SECONDARY_SIZE_MUL: f32 = 0.55;
pub const SECONDARY_ALPHA_BASE: f32 = 0.10;
pub const SECONDARY_ALPHA_INFLUENCE: f32 = 0.25;
pub const SECONDARY_ALPHA_MUL: f32 = 0.9;
pub const SECONDARY_DROP: f32 = 3.4;

// Particles
pub const PARTICLE_BASE_COUNT: usize = 150;
pub const PARTICLE_WRAP_MARGIN_PX: f32 = 30.0;
pub const PARTICLE_DRIFT_MIN: f32 = 6.0;
pub const PARTICLE_DRIFT_SPAN: f32 = 18.0;
pub const PARTICLE_SPEED_MIN: f32 = 18.0; // px per second
pub const PARTICLE_SPEED_SPAN: f32 = 55.0;
pub const PARTICLE_SIZE_MIN: f32 = 1.2;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_PHASE_RATE_BASE: f32 = 1.1;
pub const PARTICLE_PHASE_RATE_SPEED_REF: f32 = 80.0;
pub const PARTICLE_PHASE_RATE_SPEED_MUL: f32 = 0.25;
pub const PARTICLE_FLOAT_FREQ: f32 = 0.012; // radians per px
pub const PARTICLE_ENERGIZE_TIME_RATE: f32 = 10.0;
pub const PARTICLE_ENERGIZE_AMP: f32 = 14.0;
pub const PARTICLE_INFLUENCE_GROWTH: f32 = 2.0;
pub const PARTICLE_ALPHA_BASE: f32 = 0.12;
pub const PARTICLE_ALPHA_INFLUENCE: f32 = 0.55;

// Layer opacity
pub const CONTOUR_LAYER_ALPHA: f32 = 0.55;
pub const PARTICLE_LAYER_ALPHA: f32 = 0.8;
