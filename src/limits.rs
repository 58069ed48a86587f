//! Page constraint set: allowed position, size, and rotation ranges.
//!
//! Pure configuration. Position bounds depend on the page dimensions and
//! must be recomputed whenever the page size changes: the vertical range is
//! extended past the visible page by the "danger zone" — half the difference
//! between the full-bleed height and the page height — so elements may bleed
//! above and below the page.

#[cfg(test)]
#[path = "limits_test.rs"]
mod limits_test;

use crate::consts::{
    ELEMENT_SIZE_MAX, ELEMENT_SIZE_MIN, FULLBLEED_RATIO, ROTATION_MAX_DEG, ROTATION_MIN_DEG,
};

/// An inclusive min/max range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Clamp a value into this range.
    #[must_use]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Named bounds for element properties plus the page dimensions they derive from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub x: Range,
    pub y: Range,
    pub width: Range,
    pub height: Range,
    /// Informational only: rotation is normalised mod 360, never clamped.
    pub rotation: Range,
    pub page_width: f64,
    pub page_height: f64,
    /// Vertical bleed margin above and below the visible page.
    pub danger_zone_height: f64,
}

impl Limits {
    /// Compute the constraint set for a page of the given size.
    #[must_use]
    pub fn for_page(page_width: f64, page_height: f64) -> Self {
        let fullbleed_height = page_width / FULLBLEED_RATIO;
        let danger_zone_height = (fullbleed_height - page_height) / 2.0;
        let dz = danger_zone_height.floor();
        Self {
            x: Range { min: 1.0, max: page_width - 1.0 },
            y: Range { min: 1.0 - dz, max: page_height + dz - 1.0 },
            width: Range { min: ELEMENT_SIZE_MIN, max: ELEMENT_SIZE_MAX },
            height: Range { min: ELEMENT_SIZE_MIN, max: ELEMENT_SIZE_MAX },
            rotation: Range { min: ROTATION_MIN_DEG, max: ROTATION_MAX_DEG },
            page_width,
            page_height,
            danger_zone_height,
        }
    }

    /// The lowest Y still inside the bleed area; elements past this are
    /// outside even the danger zone.
    #[must_use]
    pub fn bleed_bottom(&self) -> f64 {
        self.page_height + self.danger_zone_height
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::for_page(crate::consts::DEFAULT_PAGE_WIDTH, crate::consts::DEFAULT_PAGE_HEIGHT)
    }
}
