// Host-side tests for pure pointer/canvas helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn normalize_maps_rect_corners_and_center() {
    assert_eq!(normalize_in_rect(10.0, 20.0, 10.0, 20.0, 400.0, 300.0), [0.0, 0.0]);
    assert_eq!(normalize_in_rect(410.0, 320.0, 10.0, 20.0, 400.0, 300.0), [1.0, 1.0]);
    assert_eq!(normalize_in_rect(210.0, 170.0, 10.0, 20.0, 400.0, 300.0), [0.5, 0.5]);
}

#[test]
fn normalize_clamps_points_outside_the_rect() {
    assert_eq!(normalize_in_rect(-50.0, 900.0, 0.0, 0.0, 400.0, 300.0), [0.0, 1.0]);
    assert_eq!(normalize_in_rect(1000.0, -1.0, 0.0, 0.0, 400.0, 300.0), [1.0, 0.0]);
}

#[test]
fn normalize_survives_a_collapsed_rect() {
    // width/height of 0 divide by 1 instead
    let [u, v] = normalize_in_rect(0.5, 3.0, 0.0, 0.0, 0.0, 0.0);
    assert!(u.is_finite() && v.is_finite());
    assert_eq!(u, 0.5);
    assert_eq!(v, 1.0);
}

#[test]
fn backing_size_scales_by_dpr_and_floors() {
    assert_eq!(backing_size(400.0, 300.0, 1.0), (400, 300));
    assert_eq!(backing_size(400.0, 300.0, 2.0), (800, 600));
    assert_eq!(backing_size(100.7, 50.2, 1.5), (151, 75));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.2, 0.2, 1.0), (1, 1));
}

#[test]
fn effective_dpr_falls_back_to_one() {
    assert_eq!(effective_dpr(2.0), 2.0);
    assert_eq!(effective_dpr(0.0), 1.0);
    assert_eq!(effective_dpr(-3.0), 1.0);
    assert_eq!(effective_dpr(f64::NAN), 1.0);
}
