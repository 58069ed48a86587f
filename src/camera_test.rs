#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.scroll_x, 0.0);
    assert_eq!(cam.scroll_y, 0.0);
}

// --- editor_to_data ---

#[test]
fn editor_to_data_identity() {
    let cam = Camera::default();
    assert!(approx_eq(cam.editor_to_data(50.0, Axis::X), 50.0));
    assert!(approx_eq(cam.editor_to_data(75.0, Axis::Y), 75.0));
}

#[test]
fn editor_to_data_with_zoom() {
    let cam = Camera { zoom: 4.0, scroll_x: 0.0, scroll_y: 0.0 };
    assert!(approx_eq(cam.editor_to_data(40.0, Axis::X), 10.0));
    assert!(approx_eq(cam.editor_to_data(80.0, Axis::Y), 20.0));
}

#[test]
fn editor_to_data_with_scroll() {
    let cam = Camera { zoom: 1.0, scroll_x: 100.0, scroll_y: 50.0 };
    assert!(approx_eq(cam.editor_to_data(0.0, Axis::X), 100.0));
    assert!(approx_eq(cam.editor_to_data(0.0, Axis::Y), 50.0));
}

#[test]
fn editor_to_data_axis_picks_matching_scroll() {
    let cam = Camera { zoom: 1.0, scroll_x: 10.0, scroll_y: 99.0 };
    assert!(approx_eq(cam.editor_to_data(0.0, Axis::X), 10.0));
    assert!(approx_eq(cam.editor_to_data(0.0, Axis::Y), 99.0));
}

// --- data_to_editor ---

#[test]
fn data_to_editor_with_zoom_and_scroll() {
    let cam = Camera { zoom: 2.0, scroll_x: 20.0, scroll_y: 10.0 };
    assert!(approx_eq(cam.data_to_editor(30.0, Axis::X), 40.0));
    assert!(approx_eq(cam.data_to_editor(30.0, Axis::Y), 50.0));
}

// --- Round trips ---

#[test]
fn round_trip_identity() {
    let cam = Camera::default();
    let back = cam.editor_to_data(cam.data_to_editor(123.0, Axis::X), Axis::X);
    assert!(approx_eq(back, 123.0));
}

#[test]
fn round_trip_with_zoom_and_scroll() {
    let cam = Camera { zoom: 0.75, scroll_x: 13.7, scroll_y: -42.3 };
    let back = cam.data_to_editor(cam.editor_to_data(333.3, Axis::Y), Axis::Y);
    assert!(approx_eq(back, 333.3));
}

#[test]
fn round_trip_points() {
    let cam = Camera { zoom: 2.0, scroll_x: 50.0, scroll_y: -30.0 };
    let p = Point::new(100.0, 200.0);
    let back = cam.editor_point_to_data(cam.data_point_to_editor(p));
    assert!(approx_eq(back.x, p.x));
    assert!(approx_eq(back.y, p.y));
}

// --- Lengths ---

#[test]
fn lengths_ignore_scroll() {
    let cam = Camera { zoom: 2.0, scroll_x: 999.0, scroll_y: -999.0 };
    assert!(approx_eq(cam.editor_len_to_data(10.0), 5.0));
    assert!(approx_eq(cam.data_len_to_editor(5.0), 10.0));
}

// --- to_data_pixel ---

#[test]
fn to_data_pixel_rounds_half_away_from_zero() {
    assert_eq!(to_data_pixel(0.5), 1.0);
    assert_eq!(to_data_pixel(-0.5), -1.0);
    assert_eq!(to_data_pixel(2.4), 2.0);
    assert_eq!(to_data_pixel(2.6), 3.0);
    assert_eq!(to_data_pixel(-2.5), -3.0);
}

#[test]
fn to_data_pixel_is_idempotent() {
    for v in [-1000.25, -0.5, 0.0, 0.4999, 17.5, 123_456.789] {
        let once = to_data_pixel(v);
        assert_eq!(to_data_pixel(once), once);
    }
}

#[test]
fn to_data_pixel_preserves_integers() {
    assert_eq!(to_data_pixel(42.0), 42.0);
    assert_eq!(to_data_pixel(-17.0), -17.0);
}
