//! Editor/data coordinate conversion.
//!
//! Elements are stored in **data pixels** — a canonical, zoom-independent
//! unit. Everything on screen lives in **editor pixels**, a function of the
//! current zoom level and scroll offset supplied by the host layout. All
//! geometry that is committed back onto an element goes through
//! [`to_data_pixel`]; live preview math stays in editor space and is never
//! rounded with the data rule.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A point in either editor or data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Round to the nearest data pixel, halves away from zero.
///
/// This is the single rounding rule for every value written back onto an
/// element, and it is applied per coordinate (per rotated corner, not to a
/// final box) so stored geometry reproduces bit-for-bit. Idempotent:
/// `to_data_pixel(to_data_pixel(v)) == to_data_pixel(v)`.
#[must_use]
pub fn to_data_pixel(v: f64) -> f64 {
    v.round()
}

/// Zoom/scroll state mapping between editor and data space.
///
/// `scroll_x` / `scroll_y` are in editor pixels. `zoom` is a scale factor
/// (1.0 = one data pixel per editor pixel). The host owns both; the engine
/// only reads them.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub zoom: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0, scroll_x: 0.0, scroll_y: 0.0 }
    }
}

impl Camera {
    /// Convert an editor-space coordinate to data space.
    #[must_use]
    pub fn editor_to_data(&self, value: f64, axis: Axis) -> f64 {
        let scroll = match axis {
            Axis::X => self.scroll_x,
            Axis::Y => self.scroll_y,
        };
        (value + scroll) / self.zoom
    }

    /// Convert a data-space coordinate to editor space.
    #[must_use]
    pub fn data_to_editor(&self, value: f64, axis: Axis) -> f64 {
        let scroll = match axis {
            Axis::X => self.scroll_x,
            Axis::Y => self.scroll_y,
        };
        value * self.zoom - scroll
    }

    /// Convert an editor-space point to data space.
    #[must_use]
    pub fn editor_point_to_data(&self, p: Point) -> Point {
        Point {
            x: self.editor_to_data(p.x, Axis::X),
            y: self.editor_to_data(p.y, Axis::Y),
        }
    }

    /// Convert a data-space point to editor space.
    #[must_use]
    pub fn data_point_to_editor(&self, p: Point) -> Point {
        Point {
            x: self.data_to_editor(p.x, Axis::X),
            y: self.data_to_editor(p.y, Axis::Y),
        }
    }

    /// Convert an editor-space length (scroll-independent) to data space.
    #[must_use]
    pub fn editor_len_to_data(&self, len: f64) -> f64 {
        len / self.zoom
    }

    /// Convert a data-space length (scroll-independent) to editor space.
    #[must_use]
    pub fn data_len_to_editor(&self, len: f64) -> f64 {
        len * self.zoom
    }
}
