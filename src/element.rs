//! Element model: placed page elements, sparse updates, and the props bag.
//!
//! This module defines the records the engine computes over (`Element`), the
//! sparse-update type issued back to the host (`PartialElement`), and a typed
//! accessor for the open-ended `props` JSON bag (`Props`). Elements are owned
//! by the host's page store; the engine never mutates them directly — every
//! operation returns `PartialElement` values for the host to apply
//! transactionally.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a page element.
pub type ElementId = Uuid;

/// Per-element-id map of sparse updates, applied all-or-nothing by the host.
pub type Updates = HashMap<ElementId, PartialElement>;

/// The kind of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Text block; height follows content via the resize hook.
    Text,
    /// Raster or vector image. Eligible for background promotion.
    Image,
    /// Video. Eligible for background promotion.
    Video,
    /// Plain shape (rectangle, ellipse, etc. — drawn from `props`).
    Shape,
}

impl ElementKind {
    /// Whether this kind may be promoted to the page background when a drag
    /// leaves it covering the whole page.
    #[must_use]
    pub fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

/// Horizontal/vertical mirroring flags. Flipping never changes the
/// axis-aligned bounding box, so the geometry kernel ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Border insets in data pixels, drawn outside `width`/`height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// A placed element as stored on a page and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Element type; selects rendering and the resize side-effect hook.
    pub kind: ElementKind,
    /// Left edge of the unrotated box, in data pixels.
    pub x: f64,
    /// Top edge of the unrotated box, in data pixels.
    pub y: f64,
    /// Width of the unrotated box in data pixels. Always positive.
    pub width: f64,
    /// Height of the unrotated box in data pixels. Always positive.
    pub height: f64,
    /// Clockwise rotation in degrees around the box center, interpreted mod 360.
    #[serde(default)]
    pub rotation_angle: f64,
    /// Whether interactive resize keeps the width/height ratio fixed.
    #[serde(default)]
    pub lock_aspect_ratio: bool,
    /// Mirroring flags.
    #[serde(default)]
    pub flip: Flip,
    /// Border insets, excluded from `width`/`height`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Whether this element is the page background.
    #[serde(default)]
    pub is_background: bool,
    /// Open-ended per-kind properties (text content, media source, etc.).
    #[serde(default)]
    pub props: serde_json::Value,
}

impl Element {
    /// The unrotated box expanded by border insets. Borders are visible ink,
    /// so safe-zone checks measure against this box rather than the raw one.
    #[must_use]
    pub fn outer_box(&self) -> (f64, f64, f64, f64) {
        match self.border {
            Some(b) => (
                self.x - b.left,
                self.y - b.top,
                self.width + b.left + b.right,
                self.height + b.top + b.bottom,
            ),
            None => (self.x, self.y, self.width, self.height),
        }
    }

    /// Width-to-height ratio of the unrotated box.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialElement {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_angle: Option<f64>,
    /// New background flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_background: Option<bool>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

impl PartialElement {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.rotation_angle.is_none()
            && self.is_background.is_none()
            && self.props.is_none()
    }

    /// Overlay `other` onto `self`: fields present in `other` win. Used when
    /// a resize side-effect hook overrides committed geometry.
    pub fn merge(&mut self, other: PartialElement) {
        if other.x.is_some() {
            self.x = other.x;
        }
        if other.y.is_some() {
            self.y = other.y;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.rotation_angle.is_some() {
            self.rotation_angle = other.rotation_angle;
        }
        if other.is_background.is_some() {
            self.is_background = other.is_background;
        }
        if other.props.is_some() {
            self.props = other.props;
        }
    }
}

/// Typed access to common props fields from an `Element.props` JSON value.
pub struct Props<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a `props` JSON value for typed access.
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Text content. Empty string when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value.get("text").and_then(|v| v.as_str()).unwrap_or("")
    }

    /// Font size in data pixels. Defaults to `24.0` when absent.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.value
            .get("font_size")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(24.0)
    }

    /// Line height multiplier. Defaults to `1.2` when absent.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.value
            .get("line_height")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(1.2)
    }

    /// Media source URL. Empty string when absent.
    #[must_use]
    pub fn src(&self) -> &str {
        self.value.get("src").and_then(|v| v.as_str()).unwrap_or("")
    }
}
