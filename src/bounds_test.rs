#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::element::{ElementKind, Flip};
use crate::geometry::element_frame;

fn make_element(x: f64, y: f64, width: f64, height: f64, rotation_angle: f64) -> Element {
    Element {
        id: Uuid::new_v4(),
        kind: ElementKind::Shape,
        x,
        y,
        width,
        height,
        rotation_angle,
        lock_aspect_ratio: false,
        flip: Flip::default(),
        border: None,
        is_background: false,
        props: json!({}),
    }
}

fn limits() -> Limits {
    Limits::for_page(412.0, 618.0)
}

// --- bound_rect ---

#[test]
fn empty_selection_is_an_error() {
    assert_eq!(bound_rect(&[], &limits()), Err(EngineError::EmptySelection));
}

#[test]
fn single_element_aligns_against_the_page() {
    let e = make_element(100.0, 100.0, 50.0, 50.0, 0.0);
    let b = bound_rect(std::slice::from_ref(&e), &limits()).unwrap();
    assert_eq!(b, BoundRect::from_edges(0.0, 0.0, 412.0, 618.0));
}

#[test]
fn multi_selection_uses_the_union_frame() {
    let a = make_element(10.0, 10.0, 100.0, 50.0, 0.0);
    let b = make_element(30.0, 20.0, 100.0, 50.0, 0.0);
    let r = bound_rect(&[a, b], &limits()).unwrap();
    assert_eq!(r, BoundRect::from_edges(10.0, 10.0, 130.0, 70.0));
}

// --- min_max_for ---

#[test]
fn min_max_unrotated_has_zero_offsets() {
    let l = limits();
    let e = make_element(50.0, 50.0, 100.0, 80.0, 0.0);
    let mm = min_max_for(&e, &l);
    assert_eq!(mm.min_x, l.x.min - 100.0);
    assert_eq!(mm.min_y, l.y.min - 80.0);
    assert_eq!(mm.max_x, l.x.max);
    assert_eq!(mm.max_y, l.y.max);
}

#[test]
fn min_max_rotated_offsets_by_frame_growth() {
    let l = limits();
    let e = make_element(100.0, 100.0, 100.0, 100.0, 45.0);
    let frame = element_frame(&e);
    let mm = min_max_for(&e, &l);
    let x_offset = e.x - frame.x;
    assert_eq!(mm.min_x, l.x.min + x_offset - frame.width);
    assert_eq!(mm.max_x, l.x.max + x_offset);
}

// --- multi_min_max ---

#[test]
fn multi_empty_selection_is_an_error() {
    assert_eq!(multi_min_max(&[], &limits()), Err(EngineError::EmptySelection));
}

#[test]
fn single_element_fold_matches_min_max_for() {
    let l = limits();
    let e = make_element(50.0, 50.0, 100.0, 80.0, 0.0);
    assert_eq!(multi_min_max(std::slice::from_ref(&e), &l).unwrap(), min_max_for(&e, &l));
}

#[test]
fn fold_takes_the_most_restrictive_bound() {
    let l = limits();
    let wide = make_element(0.0, 0.0, 200.0, 50.0, 0.0);
    let tall = make_element(0.0, 0.0, 50.0, 300.0, 0.0);
    let mm = multi_min_max(&[wide.clone(), tall.clone()], &l).unwrap();
    let a = min_max_for(&wide, &l);
    let b = min_max_for(&tall, &l);
    assert_eq!(mm.min_x, a.min_x.max(b.min_x));
    assert_eq!(mm.min_y, a.min_y.max(b.min_y));
    assert_eq!(mm.max_x, a.max_x.min(b.max_x));
    assert_eq!(mm.max_y, a.max_y.min(b.max_y));
}

#[test]
fn tightening_a_size_never_grows_the_range() {
    let l = limits();
    let a = make_element(0.0, 0.0, 200.0, 100.0, 0.0);
    let b = make_element(20.0, 30.0, 150.0, 90.0, 0.0);
    let before = multi_min_max(&[a.clone(), b.clone()], &l).unwrap();

    let mut smaller = b;
    smaller.width = 80.0;
    smaller.height = 40.0;
    let after = multi_min_max(&[a, smaller], &l).unwrap();

    assert!(after.min_x >= before.min_x);
    assert!(after.min_y >= before.min_y);
    assert!(after.max_x <= before.max_x);
    assert!(after.max_y <= before.max_y);
}
