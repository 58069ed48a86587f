//! Geometry kernel: rotated bounding boxes and their corners.
//!
//! Pure functions only. Rotation is clockwise in degrees around the box
//! center. Every rotated coordinate is rounded per corner with the data-pixel
//! rule ([`crate::camera::to_data_pixel`]) *before* the min/max fold — the
//! rounding order changes the result by at most one pixel, and stored
//! documents depend on this exact order.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::camera::{Point, to_data_pixel};
use crate::element::Element;
use crate::error::EngineError;

/// The axis-aligned bounding box of an element after rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The union frame of a set of elements, used as an alignment reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRect {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundRect {
    /// Build from edges, deriving width/height.
    #[must_use]
    pub fn from_edges(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
            width: end_x - start_x,
            height: end_y - start_y,
        }
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.start_x + self.end_x) / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        (self.start_y + self.end_y) / 2.0
    }
}

/// The four rotated corners of a box, each rounded to data pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Corners {
    /// Corners as an array for folding.
    #[must_use]
    pub fn as_array(&self) -> [Point; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

/// Rotate one corner about `(cx, cy)` by `angle_rad`, rounding each component.
fn rotate_corner(cx: f64, cy: f64, x: f64, y: f64, angle_rad: f64) -> Point {
    let dx = x - cx;
    let dy = y - cy;
    let dist = dx.hypot(dy);
    let theta = dy.atan2(dx) + angle_rad;
    Point {
        x: to_data_pixel(cx + dist * theta.cos()),
        y: to_data_pixel(cy + dist * theta.sin()),
    }
}

/// The four corners of the box rotated by `angle` degrees about its center.
///
/// Exposed standalone (not only inside [`rotated_frame`]): safe-zone checks
/// test individual corners against a threshold.
#[must_use]
pub fn corners(angle: f64, x: f64, y: f64, width: f64, height: f64) -> Corners {
    let cx = x + width / 2.0;
    let cy = y + height / 2.0;
    let rad = angle.to_radians();
    Corners {
        top_left: rotate_corner(cx, cy, x, y, rad),
        top_right: rotate_corner(cx, cy, x + width, y, rad),
        bottom_right: rotate_corner(cx, cy, x + width, y + height, rad),
        bottom_left: rotate_corner(cx, cy, x, y + height, rad),
    }
}

/// Axis-aligned bounding box of the box rotated by `angle` degrees.
///
/// An angle of zero (or a non-finite angle) returns the input box unchanged,
/// bit-for-bit — downstream offset math relies on exact equality, so this is
/// a required identity, not an optimisation.
#[must_use]
pub fn rotated_frame(angle: f64, x: f64, y: f64, width: f64, height: f64) -> Frame {
    if angle == 0.0 || !angle.is_finite() {
        return Frame { x, y, width, height };
    }
    let pts = corners(angle, x, y, width, height).as_array();
    let mut min_x = pts[0].x;
    let mut min_y = pts[0].y;
    let mut max_x = pts[0].x;
    let mut max_y = pts[0].y;
    for p in &pts[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Frame {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// The rotated bounding frame of an element.
#[must_use]
pub fn element_frame(element: &Element) -> Frame {
    rotated_frame(
        element.rotation_angle,
        element.x,
        element.y,
        element.width,
        element.height,
    )
}

/// Union bounding rectangle of one or more elements.
///
/// # Errors
///
/// [`EngineError::EmptySelection`] when `elements` is empty.
pub fn union_frame(elements: &[Element]) -> Result<BoundRect, EngineError> {
    let (first, rest) = elements.split_first().ok_or(EngineError::EmptySelection)?;
    let f = element_frame(first);
    let mut start_x = f.x;
    let mut start_y = f.y;
    let mut end_x = f.x + f.width;
    let mut end_y = f.y + f.height;
    for element in rest {
        let f = element_frame(element);
        start_x = start_x.min(f.x);
        start_y = start_y.min(f.y);
        end_x = end_x.max(f.x + f.width);
        end_y = end_y.max(f.y + f.height);
    }
    Ok(BoundRect::from_edges(start_x, start_y, end_x, end_y))
}

/// Whether any rotated corner of the element sits strictly below `y_limit`.
///
/// Measures the border-expanded outer box: borders are visible ink and count
/// against the safe area.
#[must_use]
pub fn extends_below(element: &Element, y_limit: f64) -> bool {
    let (x, y, width, height) = element.outer_box();
    corners(element.rotation_angle, x, y, width, height)
        .as_array()
        .iter()
        .any(|p| p.y > y_limit)
}
