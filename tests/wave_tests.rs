use mountain_core::{
    sample_y, swell_envelope, wave_terms, ContourConfig, FrameSnapshot, PointerState,
    SurfaceState,
};

fn snapshot(width: f32, height: f32, px: f32, py: f32, t: f64) -> FrameSnapshot {
    FrameSnapshot {
        elapsed_sec: t,
        pointer: PointerState {
            x: px,
            y: py,
            last_real_update_ms: 0.0,
        },
        surface: SurfaceState::new(width, height, 1.0),
        influence_radius: 220.0,
    }
}

fn contour() -> ContourConfig {
    ContourConfig::new(0.5, 40.0, 1.6, 6, 4.1, 1.6)
}

#[test]
fn sample_is_deterministic() {
    let c = contour();
    let snap = snapshot(1280.0, 720.0, 0.3, 0.6, 12.75);
    for i in 0..50 {
        let x = i as f32 * 25.6;
        let a = sample_y(&c, x, &snap);
        let b = sample_y(&c, x, &snap);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn terms_sum_to_sample() {
    let c = contour();
    let snap = snapshot(800.0, 600.0, 0.5, 0.5, 3.3);
    let terms = wave_terms(&c, 410.0, &snap);
    assert_eq!(terms.base_y, 300.0);
    assert!((terms.y() - sample_y(&c, 410.0, &snap)).abs() < 1e-4);
}

#[test]
fn sample_stays_within_max_excursion() {
    let c = contour();
    let reach = c.max_excursion();
    for &(px, py) in &[(0.0, 0.0), (0.5, 0.5), (1.0, 0.5), (0.2, 1.0)] {
        for step in 0..40 {
            let t = step as f64 * 0.37;
            let snap = snapshot(1000.0, 800.0, px, py, t);
            for xi in -3..=103 {
                let x = xi as f32 * 10.0;
                let dy = sample_y(&c, x, &snap) - 400.0;
                assert!(dy.abs() <= reach + 1e-3, "x={x} t={t} dy={dy} reach={reach}");
            }
        }
    }
}

#[test]
fn warp_and_bend_vanish_far_from_pointer() {
    let c = contour();
    // pointer parked in the top-left corner, sample far right
    let snap = snapshot(2000.0, 1000.0, 0.0, 0.0, 4.2);
    let terms = wave_terms(&c, 1900.0, &snap);
    assert_eq!(terms.warp, 0.0);
    assert_eq!(terms.bend, 0.0);
}

#[test]
fn warp_acts_under_the_pointer() {
    let c = contour();
    let snap = snapshot(800.0, 600.0, 0.5, 0.5, 0.0);
    let terms = wave_terms(&c, 400.0, &snap);
    // full influence: warp = sin(0 + 0.5 * 12) * amp * 0.46
    let expected = 6.0_f32.sin() * 40.0 * 0.46;
    assert!((terms.warp - expected).abs() < 1e-3);
    assert!(terms.bend.abs() > 0.0);
}

#[test]
fn swell_envelope_tapers_across_the_width() {
    assert!((swell_envelope(0.0) - 1.0).abs() < 1e-6);
    assert!((swell_envelope(0.5) - 0.6).abs() < 1e-6);
    assert!((swell_envelope(1.0) - 0.2).abs() < 1e-6);
    assert!(swell_envelope(1.0) < swell_envelope(0.5));
}

#[test]
fn pointer_to_the_right_livens_the_noise() {
    let c = contour();
    let calm = wave_terms(&c, 130.0, &snapshot(800.0, 600.0, 0.0, 0.5, 1.0)).noise;
    let lively = wave_terms(&c, 130.0, &snapshot(800.0, 600.0, 1.0, 0.5, 1.0)).noise;
    assert!(calm.abs() > 0.0);
    assert!(lively.abs() > calm.abs());
}

#[test]
fn jitter_phase_differs_between_contours() {
    let snap = snapshot(800.0, 600.0, 0.5, 0.5, 2.0);
    let a = ContourConfig::new(0.40, 40.0, 1.6, 6, 4.0, 1.6);
    let b = ContourConfig::new(0.56, 40.0, 1.6, 6, 4.0, 1.6);
    assert_ne!(wave_terms(&a, 200.0, &snap).jitter, wave_terms(&b, 200.0, &snap).jitter);
}

#[test]
fn collapsed_surface_still_samples() {
    let c = contour();
    let snap = snapshot(0.0, 0.0, 0.5, 0.5, 1.0);
    assert!(sample_y(&c, 0.0, &snap).is_finite());
}

#[test]
fn phases_keep_advancing_on_a_week_old_clock() {
    let week = 7.0 * 24.0 * 3600.0;
    let a = snapshot(800.0, 600.0, 0.5, 0.5, week + 0.016);
    let b = snapshot(800.0, 600.0, 0.5, 0.5, week + 0.032);
    for rate in [1.35_f32, 6.8, 10.5] {
        let step = (b.phase(rate) - a.phase(rate)).rem_euclid(std::f32::consts::TAU);
        assert!((step - rate * 0.016).abs() < 1e-3, "rate={rate} step={step}");
    }
}
