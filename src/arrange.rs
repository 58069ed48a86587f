//! Alignment and distribution of a selection against a reference rectangle.
//!
//! Every operation reads element frames, computes new positions, and returns
//! a per-element [`Updates`] map — nothing is mutated here. The host applies
//! the map transactionally and recomputes layout.
//!
//! Edge alignment compensates for rotation: the symmetric offset between an
//! element's rotated frame and its raw box, `(frame_size - size) / 2`, is
//! what makes the *visual* edge touch the reference edge. Centering needs no
//! such correction because frame and box share a center.

#[cfg(test)]
#[path = "arrange_test.rs"]
mod arrange_test;

use crate::camera::{Axis, to_data_pixel};
use crate::element::{Element, PartialElement, Updates};
use crate::error::EngineError;
use crate::geometry::{BoundRect, element_frame};

/// A reference edge to align against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Align every element's visual edge to the given edge of `bound`.
#[must_use]
pub fn align(edge: Edge, bound: &BoundRect, selection: &[Element]) -> Updates {
    let mut updates = Updates::new();
    for element in selection {
        let frame = element_frame(element);
        let mut fields = PartialElement::default();
        match edge {
            Edge::Left => {
                let offset = (frame.width - element.width) / 2.0;
                fields.x = Some(to_data_pixel(bound.start_x + offset));
            }
            Edge::Right => {
                let offset = (frame.width - element.width) / 2.0;
                fields.x = Some(to_data_pixel(bound.end_x - element.width - offset));
            }
            Edge::Top => {
                let offset = (frame.height - element.height) / 2.0;
                fields.y = Some(to_data_pixel(bound.start_y + offset));
            }
            Edge::Bottom => {
                let offset = (frame.height - element.height) / 2.0;
                fields.y = Some(to_data_pixel(bound.end_y - element.height - offset));
            }
        }
        updates.insert(element.id, fields);
    }
    updates
}

/// Center every element horizontally within `bound`.
///
/// Uses the raw width, not the frame width: rotation does not move the
/// center, so no edge correction applies.
#[must_use]
pub fn align_center(bound: &BoundRect, selection: &[Element]) -> Updates {
    let mut updates = Updates::new();
    for element in selection {
        updates.insert(
            element.id,
            PartialElement {
                x: Some(to_data_pixel(bound.center_x() - element.width / 2.0)),
                ..Default::default()
            },
        );
    }
    updates
}

/// Center every element vertically within `bound`.
#[must_use]
pub fn align_middle(bound: &BoundRect, selection: &[Element]) -> Updates {
    let mut updates = Updates::new();
    for element in selection {
        updates.insert(
            element.id,
            PartialElement {
                y: Some(to_data_pixel(bound.center_y() - element.height / 2.0)),
                ..Default::default()
            },
        );
    }
    updates
}

/// Evenly distribute the selection along an axis within `bound`.
///
/// Elements are ordered by frame center (stable, so equal centers keep their
/// original order). The first and last stay put as anchors; interior elements
/// are placed by a running offset threaded through the fold, seeded from the
/// first element's frame start and accumulating `frame_size + gap`.
///
/// The seed is deliberately the *frame* start, not the anchor's raw
/// coordinate: the `(frame_size - size) / 2` centering correction applied to
/// each slot reproduces exactly the anchor's raw coordinate for slot zero,
/// so one formula covers every slot. Seeding from the raw coordinate would
/// shift every interior element of a rotated-anchor selection.
///
/// # Errors
///
/// [`EngineError::TooFewToDistribute`] for fewer than three elements — with
/// two, the gap between anchors is undefined.
pub fn distribute(
    axis: Axis,
    bound: &BoundRect,
    selection: &[Element],
) -> Result<Updates, EngineError> {
    if selection.len() < 3 {
        return Err(EngineError::TooFewToDistribute { count: selection.len() });
    }

    let mut items: Vec<(&Element, crate::geometry::Frame)> =
        selection.iter().map(|e| (e, element_frame(e))).collect();
    items.sort_by(|(_, a), (_, b)| {
        let (ca, cb) = match axis {
            Axis::X => (a.x + a.width / 2.0, b.x + b.width / 2.0),
            Axis::Y => (a.y + a.height / 2.0, b.y + b.height / 2.0),
        };
        ca.partial_cmp(&cb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let (bound_size, frame_size): (f64, fn(&crate::geometry::Frame) -> f64) = match axis {
        Axis::X => (bound.width, |f| f.width),
        Axis::Y => (bound.height, |f| f.height),
    };
    let sum: f64 = items.iter().map(|(_, f)| frame_size(f)).sum();
    let common_space = bound_size - sum;
    #[allow(clippy::cast_precision_loss)]
    let gap = to_data_pixel(common_space / (items.len() - 1) as f64);

    let mut updates = Updates::new();
    let last = items.len() - 1;
    let mut offset = match axis {
        Axis::X => items[0].1.x,
        Axis::Y => items[0].1.y,
    };
    for (i, (element, frame)) in items.iter().enumerate() {
        if i != 0 && i != last {
            let fields = match axis {
                Axis::X => PartialElement {
                    x: Some(to_data_pixel(offset + (frame.width - element.width) / 2.0)),
                    ..Default::default()
                },
                Axis::Y => PartialElement {
                    y: Some(to_data_pixel(offset + (frame.height - element.height) / 2.0)),
                    ..Default::default()
                },
            };
            updates.insert(element.id, fields);
        }
        offset += frame_size(frame) + gap;
    }
    Ok(updates)
}
