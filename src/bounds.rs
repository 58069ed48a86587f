//! Selection bounds: alignment reference rectangles and allowed position ranges.
//!
//! A single selected element aligns against the page, not against itself, so
//! [`bound_rect`] returns the full-page rectangle for one element and the
//! union frame for several. [`multi_min_max`] folds per-element position
//! bounds to the most restrictive value so that any position inside the
//! returned range keeps *every* selected element within the page constraints
//! at once.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use crate::element::Element;
use crate::error::EngineError;
use crate::geometry::{BoundRect, element_frame, union_frame};
use crate::limits::Limits;

/// Allowed top-left position range for a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// The reference rectangle a selection aligns and distributes against.
///
/// # Errors
///
/// [`EngineError::EmptySelection`] when `selection` is empty.
pub fn bound_rect(selection: &[Element], limits: &Limits) -> Result<BoundRect, EngineError> {
    match selection {
        [] => Err(EngineError::EmptySelection),
        [_single] => Ok(BoundRect::from_edges(0.0, 0.0, limits.page_width, limits.page_height)),
        many => union_frame(many),
    }
}

/// Allowed position range for a single element.
///
/// The candidate bounds offset the constraint range by the difference between
/// the element's unrotated box and its rotated frame, so a rotated element's
/// *visible* extent is what stays on the page.
#[must_use]
pub fn min_max_for(element: &Element, limits: &Limits) -> MinMax {
    let frame = element_frame(element);
    let x_offset = element.x - frame.x;
    let y_offset = element.y - frame.y;
    MinMax {
        min_x: limits.x.min + x_offset - frame.width,
        min_y: limits.y.min + y_offset - frame.height,
        max_x: limits.x.max + x_offset,
        max_y: limits.y.max + y_offset,
    }
}

/// Most restrictive allowed position range across a whole selection.
///
/// # Errors
///
/// [`EngineError::EmptySelection`] when `selection` is empty.
pub fn multi_min_max(selection: &[Element], limits: &Limits) -> Result<MinMax, EngineError> {
    let (first, rest) = selection.split_first().ok_or(EngineError::EmptySelection)?;
    let mut acc = min_max_for(first, limits);
    for element in rest {
        let mm = min_max_for(element, limits);
        acc.min_x = acc.min_x.max(mm.min_x);
        acc.min_y = acc.min_y.max(mm.min_y);
        acc.max_x = acc.max_x.min(mm.max_x);
        acc.max_y = acc.max_y.min(mm.max_y);
    }
    Ok(acc)
}
