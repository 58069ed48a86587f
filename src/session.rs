//! Transform session: the live drag/resize/rotate state machine.
//!
//! One session exists per pointer gesture, from pointer-down to commit or
//! cancel. Every interactive transform follows a three-phase lifecycle:
//!
//! 1. **Start** — snapshot each participant's element and an all-zero
//!    [`FrameDelta`]; resize captures the aspect ratio, rotate captures the
//!    starting pointer angle.
//! 2. **Update** — on each pointer-move, recompute per-participant deltas in
//!    editor space (no data-pixel rounding) and push them to the
//!    [`PreviewSink`] for live visual feedback.
//! 3. **Commit** — on pointer-up, convert deltas to data space, round, clamp
//!    to the page limits, run the per-kind resize side-effect against the
//!    final values, and emit one [`Action`] per participant that actually
//!    changed.
//!
//! Cancel clears previews and emits nothing. The session never mutates
//! elements or the rendering layer itself; previews go through the sink and
//! committed values through the returned actions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use tracing::debug;

use crate::camera::{Camera, Point, to_data_pixel};
use crate::consts::{BACKGROUND_COVERAGE_RATIO, ROTATION_SNAP_STEP_DEG, ZERO_SNAP_DATA_PX};
use crate::element::{Element, ElementId, ElementKind, PartialElement};
use crate::error::EngineError;
use crate::geometry::{Frame, element_frame};
use crate::limits::Limits;

/// Normalise an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Absolute angular distance between two angles, wrap-aware.
#[must_use]
pub fn angular_delta_deg(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs().rem_euclid(360.0);
    delta.min(360.0 - delta)
}

/// Kind of gesture a session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Drag,
    Resize,
    Rotate,
}

/// Which corner/edge handle is being dragged during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Sign vector `(dx, dy)`: which direction dragging this handle grows the box.
    #[must_use]
    pub fn signs(self) -> (i8, i8) {
        match self {
            Self::N => (0, -1),
            Self::Ne => (1, -1),
            Self::E => (1, 0),
            Self::Se => (1, 1),
            Self::S => (0, 1),
            Self::Sw => (-1, 1),
            Self::W => (-1, 0),
            Self::Nw => (-1, -1),
        }
    }
}

/// Keyboard modifier keys held during a pointer event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift forces aspect lock on resize and 30° snapping on rotate.
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Live per-participant transform delta, in editor space.
///
/// Reset to all-zero when the session ends; it never outlives one gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameDelta {
    /// Raw pointer translation in editor pixels.
    pub translate: (f64, f64),
    /// Rotation delta in degrees from the element's starting angle.
    pub rotate: f64,
    /// New editor-space size; `(0.0, 0.0)` means size untouched.
    pub resize: (f64, f64),
    /// Sign vector of the active resize handle.
    pub direction: (i8, i8),
    /// Extra property overrides from the element-kind resize side-effect.
    pub updates: Option<PartialElement>,
}

/// One element taking part in a session, plus the host's opaque handle to
/// its visual node. The engine never touches the node; it only passes the
/// handle back through the [`PreviewSink`].
#[derive(Debug, Clone)]
pub struct Participant {
    pub element: Element,
    pub node: usize,
}

/// Host-supplied preview layer: applies a live transform to a visual node.
///
/// Keeping this behind a trait means the session has no rendering-target
/// dependency and can be driven headlessly in tests.
pub trait PreviewSink {
    /// Apply the current delta to the node's visual transform.
    fn apply(&mut self, node: usize, delta: &FrameDelta);
    /// Reset the node's visual transform to identity.
    fn clear(&mut self, node: usize);
}

/// Per-element-kind resize side-effect (e.g. text auto-height).
///
/// Called with the element snapshot, the handle sign vector, and the
/// computed width/height in data pixels; may override any committed fields.
pub type ResizeHook = Box<dyn Fn(&Element, (i8, i8), f64, f64) -> Option<PartialElement>>;

/// Capability lookup for resize side-effects, keyed by element kind.
///
/// Absence of a hook means "no side effect", not an error.
#[derive(Default)]
pub struct ResizeHooks {
    hooks: HashMap<ElementKind, ResizeHook>,
}

impl ResizeHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the hook for an element kind.
    pub fn register(&mut self, kind: ElementKind, hook: ResizeHook) {
        self.hooks.insert(kind, hook);
    }

    /// Look up the hook for an element kind.
    #[must_use]
    pub fn get(&self, kind: ElementKind) -> Option<&ResizeHook> {
        self.hooks.get(&kind)
    }
}

/// Result of a session commit, one per participant that changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Apply these fields to the element.
    Updated { id: ElementId, fields: PartialElement },
    /// The element ended fully outside the page container; remove it.
    Deleted { id: ElementId },
    /// A dragged media element now covers the page; make it the background.
    BackgroundPromoted { id: ElementId, fields: PartialElement },
}

/// A pointer-move update for the active session. Updates whose variant does
/// not match the session kind are ignored.
#[derive(Debug, Clone, Copy)]
pub enum SessionUpdate {
    /// Raw pointer delta in editor pixels since pointer-down.
    Drag { delta: Point },
    /// Pointer drag vector in editor pixels since pointer-down.
    Resize { delta: Point, modifiers: Modifiers },
    /// Current compass angle of the pointer around the selection center.
    Rotate { pointer_angle_deg: f64, modifiers: Modifiers },
}

struct ParticipantState {
    element: Element,
    node: usize,
    delta: FrameDelta,
    /// Aspect ratio captured at session start; locked resizes derive the
    /// paired axis from this, never from the live ratio.
    start_ratio: f64,
}

enum Gesture {
    Drag,
    Resize { anchor: ResizeAnchor },
    Rotate { start_pointer_angle_deg: f64 },
}

/// The state machine for one interactive gesture.
pub struct TransformSession {
    gesture: Gesture,
    participants: Vec<ParticipantState>,
}

impl TransformSession {
    fn new(gesture: Gesture, participants: Vec<Participant>) -> Result<Self, EngineError> {
        if participants.is_empty() {
            return Err(EngineError::NoParticipants);
        }
        let participants = participants
            .into_iter()
            .map(|p| {
                let start_ratio = p.element.aspect_ratio();
                ParticipantState { element: p.element, node: p.node, delta: FrameDelta::default(), start_ratio }
            })
            .collect();
        Ok(Self { gesture, participants })
    }

    /// Start a drag gesture.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoParticipants`] when `participants` is empty.
    pub fn drag(participants: Vec<Participant>) -> Result<Self, EngineError> {
        Self::new(Gesture::Drag, participants)
    }

    /// Start a resize gesture on the given handle.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoParticipants`] when `participants` is empty.
    pub fn resize(participants: Vec<Participant>, anchor: ResizeAnchor) -> Result<Self, EngineError> {
        Self::new(Gesture::Resize { anchor }, participants)
    }

    /// Start a rotate gesture from the given pointer angle.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoParticipants`] when `participants` is empty.
    pub fn rotate(participants: Vec<Participant>, start_pointer_angle_deg: f64) -> Result<Self, EngineError> {
        Self::new(Gesture::Rotate { start_pointer_angle_deg }, participants)
    }

    /// The gesture kind this session drives.
    #[must_use]
    pub fn kind(&self) -> SessionKind {
        match self.gesture {
            Gesture::Drag => SessionKind::Drag,
            Gesture::Resize { .. } => SessionKind::Resize,
            Gesture::Rotate { .. } => SessionKind::Rotate,
        }
    }

    /// Number of participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Current delta for a participant, by element id.
    #[must_use]
    pub fn delta_for(&self, id: ElementId) -> Option<&FrameDelta> {
        self.participants.iter().find(|p| p.element.id == id).map(|p| &p.delta)
    }

    /// Process one pointer-move. Runs at pointer-event frequency, so this is
    /// pure arithmetic: no rounding, no layout work.
    pub fn update(
        &mut self,
        update: &SessionUpdate,
        camera: &Camera,
        limits: &Limits,
        hooks: &ResizeHooks,
        sink: &mut dyn PreviewSink,
    ) {
        match (update, &self.gesture) {
            (SessionUpdate::Drag { delta }, Gesture::Drag) => {
                for p in &mut self.participants {
                    p.delta.translate = (delta.x, delta.y);
                    sink.apply(p.node, &p.delta);
                }
            }
            (SessionUpdate::Resize { delta, modifiers }, Gesture::Resize { anchor }) => {
                let (sx, sy) = anchor.signs();
                for p in &mut self.participants {
                    p.delta = resize_delta(&p.element, p.start_ratio, (sx, sy), *delta, *modifiers, camera, limits, hooks);
                    sink.apply(p.node, &p.delta);
                }
            }
            (SessionUpdate::Rotate { pointer_angle_deg, modifiers }, Gesture::Rotate { start_pointer_angle_deg }) => {
                let mut delta = pointer_angle_deg - start_pointer_angle_deg;
                if modifiers.shift {
                    // Snap against the lead participant only: its resulting
                    // angle lands on the grid, and every participant gets the
                    // same delta so the group's relative orientation holds.
                    let lead = self.participants[0].element.rotation_angle;
                    let snapped =
                        ((lead + delta) / ROTATION_SNAP_STEP_DEG).round() * ROTATION_SNAP_STEP_DEG;
                    delta = snapped - lead;
                }
                for p in &mut self.participants {
                    p.delta.rotate = delta;
                    sink.apply(p.node, &p.delta);
                }
            }
            // Mismatched update kind: stale event from the host, drop it.
            _ => {}
        }
    }

    /// Revert all previews and consume the session without committing.
    pub fn cancel(self, sink: &mut dyn PreviewSink) {
        debug!(participants = self.participants.len(), "session cancelled");
        for p in &self.participants {
            sink.clear(p.node);
        }
    }

    /// Finish the gesture: convert live deltas to data space and emit one
    /// [`Action`] per participant whose stored properties change.
    pub fn commit(
        self,
        camera: &Camera,
        limits: &Limits,
        hooks: &ResizeHooks,
        sink: &mut dyn PreviewSink,
    ) -> Vec<Action> {
        let kind = self.kind();
        let mut actions = Vec::new();
        for p in &self.participants {
            sink.clear(p.node);
            let fields = match &self.gesture {
                Gesture::Drag => commit_drag(&p.element, &p.delta, camera),
                Gesture::Resize { .. } => commit_resize(&p.element, &p.delta, camera, limits, hooks),
                Gesture::Rotate { .. } => commit_rotate(&p.element, &p.delta),
            };
            if fields.is_empty() {
                continue;
            }
            let committed = apply_fields(&p.element, &fields);
            let frame = element_frame(&committed);
            if outside_page(&frame, limits) {
                debug!(id = %p.element.id, "commit left element outside the page; deleting");
                actions.push(Action::Deleted { id: p.element.id });
                continue;
            }
            if kind == SessionKind::Drag
                && p.element.kind.is_media()
                && !p.element.is_background
                && page_coverage(&frame, limits) >= BACKGROUND_COVERAGE_RATIO
            {
                debug!(id = %p.element.id, "dragged media covers the page; promoting to background");
                let mut fields = fields;
                fields.is_background = Some(true);
                actions.push(Action::BackgroundPromoted { id: p.element.id, fields });
                continue;
            }
            actions.push(Action::Updated { id: p.element.id, fields });
        }
        debug!(?kind, actions = actions.len(), "session committed");
        actions
    }
}

/// Compute the live resize delta for one participant.
#[allow(clippy::too_many_arguments)]
fn resize_delta(
    element: &Element,
    start_ratio: f64,
    (sx, sy): (i8, i8),
    drag: Point,
    modifiers: Modifiers,
    camera: &Camera,
    limits: &Limits,
    hooks: &ResizeHooks,
) -> FrameDelta {
    let w0 = camera.data_len_to_editor(element.width);
    let h0 = camera.data_len_to_editor(element.height);
    let min_w = camera.data_len_to_editor(limits.width.min);
    let min_h = camera.data_len_to_editor(limits.height.min);

    let mut new_w = w0 + f64::from(sx) * drag.x;
    let mut new_h = h0 + f64::from(sy) * drag.y;

    // A degenerate ratio would turn the lock into NaN geometry; drop the lock.
    let lock = (element.lock_aspect_ratio || modifiers.shift)
        && start_ratio.is_finite()
        && start_ratio > 0.0;
    if lock {
        // The handle's axis is primary; the paired axis is derived from the
        // ratio after the primary is clamped, so the pair stays consistent.
        if sx != 0 {
            new_w = new_w.max(min_w);
            new_h = new_w / start_ratio;
        } else {
            new_h = new_h.max(min_h);
            new_w = new_h * start_ratio;
        }
    } else {
        new_w = new_w.max(min_w);
        new_h = new_h.max(min_h);
    }

    // North/west handles keep the opposite edge fixed; an axis resized only
    // by the aspect lock stays centered.
    let tx = if sx < 0 {
        w0 - new_w
    } else if sx == 0 && lock {
        (w0 - new_w) / 2.0
    } else {
        0.0
    };
    let ty = if sy < 0 {
        h0 - new_h
    } else if sy == 0 && lock {
        (h0 - new_h) / 2.0
    } else {
        0.0
    };

    let mut delta = FrameDelta {
        translate: (tx, ty),
        rotate: 0.0,
        resize: (new_w, new_h),
        direction: (sx, sy),
        updates: None,
    };

    // Side-effect hooks run after clamping, never before, and may override
    // the computed size (e.g. text auto-height).
    if let Some(hook) = hooks.get(element.kind) {
        let data_w = camera.editor_len_to_data(new_w);
        let data_h = camera.editor_len_to_data(new_h);
        if let Some(overrides) = hook(element, (sx, sy), data_w, data_h) {
            if let Some(w) = overrides.width {
                delta.resize.0 = camera.data_len_to_editor(w);
            }
            if let Some(h) = overrides.height {
                delta.resize.1 = camera.data_len_to_editor(h);
            }
            delta.updates = Some(overrides);
        }
    }
    delta
}

/// Convert a drag translation to committed fields. Sub-data-pixel movement
/// snaps to zero before rounding, so a jittery click commits as a no-op.
fn commit_drag(element: &Element, delta: &FrameDelta, camera: &Camera) -> PartialElement {
    let snap = |raw: f64| -> f64 {
        if raw.abs() < ZERO_SNAP_DATA_PX { 0.0 } else { to_data_pixel(raw) }
    };
    let dx = snap(camera.editor_len_to_data(delta.translate.0));
    let dy = snap(camera.editor_len_to_data(delta.translate.1));
    let mut fields = PartialElement::default();
    if dx != 0.0 {
        fields.x = Some(to_data_pixel(element.x + dx));
    }
    if dy != 0.0 {
        fields.y = Some(to_data_pixel(element.y + dy));
    }
    fields
}

/// Convert a resize delta to committed fields, clamped to limits and with
/// the side-effect hook applied a second time against the final size.
fn commit_resize(
    element: &Element,
    delta: &FrameDelta,
    camera: &Camera,
    limits: &Limits,
    hooks: &ResizeHooks,
) -> PartialElement {
    if delta.resize == (0.0, 0.0) {
        return PartialElement::default();
    }
    let width = limits.width.clamp(to_data_pixel(camera.editor_len_to_data(delta.resize.0)));
    let height = limits.height.clamp(to_data_pixel(camera.editor_len_to_data(delta.resize.1)));
    let x = to_data_pixel(element.x + camera.editor_len_to_data(delta.translate.0));
    let y = to_data_pixel(element.y + camera.editor_len_to_data(delta.translate.1));

    let mut fields = PartialElement::default();
    if width != element.width {
        fields.width = Some(width);
    }
    if height != element.height {
        fields.height = Some(height);
    }
    if x != element.x {
        fields.x = Some(x);
    }
    if y != element.y {
        fields.y = Some(y);
    }
    if let Some(hook) = hooks.get(element.kind) {
        if let Some(overrides) = hook(element, delta.direction, width, height) {
            fields.merge(overrides);
        }
    }
    fields
}

/// Convert a rotation delta to committed fields, normalised to `[0, 360)`.
/// Rotation is deliberately never clamped to the limit range.
fn commit_rotate(element: &Element, delta: &FrameDelta) -> PartialElement {
    if delta.rotate == 0.0 {
        return PartialElement::default();
    }
    let final_angle = normalize_degrees_360(to_data_pixel(element.rotation_angle + delta.rotate));
    let mut fields = PartialElement::default();
    if angular_delta_deg(final_angle, normalize_degrees_360(element.rotation_angle)) > f64::EPSILON {
        fields.rotation_angle = Some(final_angle);
    }
    fields
}

/// Overlay committed fields on a snapshot to get the final element.
fn apply_fields(element: &Element, fields: &PartialElement) -> Element {
    let mut e = element.clone();
    if let Some(x) = fields.x {
        e.x = x;
    }
    if let Some(y) = fields.y {
        e.y = y;
    }
    if let Some(w) = fields.width {
        e.width = w;
    }
    if let Some(h) = fields.height {
        e.height = h;
    }
    if let Some(r) = fields.rotation_angle {
        e.rotation_angle = r;
    }
    e
}

/// Whether a frame sits entirely outside the page container, including the
/// vertical bleed area.
fn outside_page(frame: &Frame, limits: &Limits) -> bool {
    let dz = limits.danger_zone_height;
    frame.x + frame.width <= 0.0
        || frame.x >= limits.page_width
        || frame.y + frame.height <= -dz
        || frame.y >= limits.page_height + dz
}

/// Fraction of the visible page area covered by a frame, in `[0, 1]`.
fn page_coverage(frame: &Frame, limits: &Limits) -> f64 {
    let ix = (frame.x + frame.width).min(limits.page_width) - frame.x.max(0.0);
    let iy = (frame.y + frame.height).min(limits.page_height) - frame.y.max(0.0);
    if ix <= 0.0 || iy <= 0.0 {
        return 0.0;
    }
    (ix * iy) / (limits.page_width * limits.page_height)
}
