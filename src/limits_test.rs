#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::consts::{DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};

// --- Range ---

#[test]
fn range_clamp() {
    let r = Range { min: 1.0, max: 10.0 };
    assert_eq!(r.clamp(-5.0), 1.0);
    assert_eq!(r.clamp(5.0), 5.0);
    assert_eq!(r.clamp(50.0), 10.0);
}

// --- Limits::for_page ---

#[test]
fn default_page_danger_zone() {
    // fullbleed = 412 / (9/16) = 732.44..; dz = (732.44 - 618) / 2 = 57.22..
    let l = Limits::for_page(412.0, 618.0);
    assert!((l.danger_zone_height - 57.222).abs() < 0.01);
    assert_eq!(l.y.min, 1.0 - 57.0);
    assert_eq!(l.y.max, 618.0 + 57.0 - 1.0);
}

#[test]
fn x_range_spans_the_page_interior() {
    let l = Limits::for_page(412.0, 618.0);
    assert_eq!(l.x.min, 1.0);
    assert_eq!(l.x.max, 411.0);
}

#[test]
fn size_bounds_are_page_independent() {
    let small = Limits::for_page(100.0, 178.0);
    let large = Limits::for_page(1000.0, 1778.0);
    assert_eq!(small.width, large.width);
    assert_eq!(small.height, large.height);
}

#[test]
fn page_resize_recomputes_position_bounds() {
    let a = Limits::for_page(412.0, 618.0);
    let b = Limits::for_page(824.0, 1236.0);
    assert!(b.x.max > a.x.max);
    assert!(b.y.max > a.y.max);
    assert!(b.danger_zone_height > a.danger_zone_height);
}

#[test]
fn default_uses_default_page() {
    let l = Limits::default();
    assert_eq!(l.page_width, DEFAULT_PAGE_WIDTH);
    assert_eq!(l.page_height, DEFAULT_PAGE_HEIGHT);
}

#[test]
fn bleed_bottom_extends_past_the_page() {
    let l = Limits::for_page(412.0, 618.0);
    assert!(l.bleed_bottom() > l.page_height);
    assert!((l.bleed_bottom() - (618.0 + 57.222)).abs() < 0.01);
}

#[test]
fn zero_danger_zone_when_page_is_fullbleed() {
    // A page already at the 9:16 fullbleed ratio has no bleed margin.
    let l = Limits::for_page(450.0, 800.0);
    assert_eq!(l.danger_zone_height, 0.0);
    assert_eq!(l.y.min, 1.0);
    assert_eq!(l.y.max, 799.0);
}
