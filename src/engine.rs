//! Engine facade: the surface the host UI layer calls into.
//!
//! Owns the camera, the page limits, the resize-hook registry, and the
//! (at most one) active transform session. Property panels use the pure
//! query methods; toolbar actions use the arrangement methods; the canvas
//! pointer bindings drive the session methods. The engine never mutates
//! element records — every mutation leaves as an [`Updates`] map or a
//! session [`Action`] the host applies through its single update entry
//! point.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::arrange;
use crate::bounds::{self, MinMax};
use crate::camera::{Axis, Camera};
use crate::element::{Element, ElementKind, Updates};
use crate::error::EngineError;
use crate::geometry::{BoundRect, Corners, Frame, corners, element_frame, union_frame};
use crate::limits::Limits;
use crate::session::{
    Action, Participant, PreviewSink, ResizeAnchor, ResizeHook, ResizeHooks, SessionKind,
    SessionUpdate, TransformSession,
};

/// Top-level engine state.
pub struct Engine {
    camera: Camera,
    limits: Limits,
    hooks: ResizeHooks,
    session: Option<TransformSession>,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            limits: Limits::default(),
            hooks: ResizeHooks::new(),
            session: None,
        }
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Host-supplied configuration ---

    /// Update the camera from the host's layout provider.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Recompute the constraint set for a new page size.
    pub fn set_page_size(&mut self, page_width: f64, page_height: f64) {
        self.limits = Limits::for_page(page_width, page_height);
    }

    /// Register a per-kind resize side-effect hook.
    pub fn register_resize_hook(&mut self, kind: ElementKind, hook: ResizeHook) {
        self.hooks.register(kind, hook);
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The current constraint set.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    // --- Pure queries (property panels) ---

    /// The rotated bounding frame of an element.
    #[must_use]
    pub fn compute_frame(&self, element: &Element) -> Frame {
        element_frame(element)
    }

    /// The rotated corners of an element's outer box.
    #[must_use]
    pub fn compute_corners(&self, element: &Element) -> Corners {
        let (x, y, width, height) = element.outer_box();
        corners(element.rotation_angle, x, y, width, height)
    }

    /// Union bounding rectangle of a set of elements.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptySelection`] when `elements` is empty.
    pub fn compute_bound_rect(&self, elements: &[Element]) -> Result<BoundRect, EngineError> {
        union_frame(elements)
    }

    /// Most restrictive allowed position range for a selection.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptySelection`] when `elements` is empty.
    pub fn compute_min_max(&self, elements: &[Element]) -> Result<MinMax, EngineError> {
        bounds::multi_min_max(elements, &self.limits)
    }

    /// Allowed position range for a single element (position-editing panels).
    #[must_use]
    pub fn compute_min_max_for(&self, element: &Element) -> MinMax {
        bounds::min_max_for(element, &self.limits)
    }

    // --- Arrangement (toolbar actions) ---

    /// The reference rectangle the selection aligns against: the page for a
    /// lone element, the union frame otherwise.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptySelection`] when `selection` is empty.
    pub fn alignment_bound(&self, selection: &[Element]) -> Result<BoundRect, EngineError> {
        bounds::bound_rect(selection, &self.limits)
    }

    /// Align the selection's visual edges to an edge of its reference rect.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptySelection`] when `selection` is empty.
    pub fn align(&self, edge: arrange::Edge, selection: &[Element]) -> Result<Updates, EngineError> {
        let bound = self.alignment_bound(selection)?;
        Ok(arrange::align(edge, &bound, selection))
    }

    /// Center the selection horizontally within its reference rect.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptySelection`] when `selection` is empty.
    pub fn align_center(&self, selection: &[Element]) -> Result<Updates, EngineError> {
        let bound = self.alignment_bound(selection)?;
        Ok(arrange::align_center(&bound, selection))
    }

    /// Center the selection vertically within its reference rect.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptySelection`] when `selection` is empty.
    pub fn align_middle(&self, selection: &[Element]) -> Result<Updates, EngineError> {
        let bound = self.alignment_bound(selection)?;
        Ok(arrange::align_middle(&bound, selection))
    }

    /// Evenly distribute the selection along an axis.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptySelection`] for an empty selection;
    /// [`EngineError::TooFewToDistribute`] for fewer than three elements.
    pub fn distribute(&self, axis: Axis, selection: &[Element]) -> Result<Updates, EngineError> {
        let bound = self.alignment_bound(selection)?;
        arrange::distribute(axis, &bound, selection)
    }

    // --- Transform sessions (canvas pointer bindings) ---

    /// Whether a gesture is currently active.
    #[must_use]
    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }

    /// The kind of the active session, if any.
    #[must_use]
    pub fn session_kind(&self) -> Option<SessionKind> {
        self.session.as_ref().map(TransformSession::kind)
    }

    fn install(&mut self, session: Result<TransformSession, EngineError>) -> Result<(), EngineError> {
        if self.session.is_some() {
            return Err(EngineError::SessionActive);
        }
        let session = session?;
        debug!(kind = ?session.kind(), participants = session.participant_count(), "session started");
        self.session = Some(session);
        Ok(())
    }

    /// Start a drag session.
    ///
    /// # Errors
    ///
    /// [`EngineError::SessionActive`] if a gesture is already running;
    /// [`EngineError::NoParticipants`] for an empty participant list.
    pub fn start_drag(&mut self, participants: Vec<Participant>) -> Result<(), EngineError> {
        self.install(TransformSession::drag(participants))
    }

    /// Start a resize session on the given handle.
    ///
    /// # Errors
    ///
    /// [`EngineError::SessionActive`] if a gesture is already running;
    /// [`EngineError::NoParticipants`] for an empty participant list.
    pub fn start_resize(
        &mut self,
        participants: Vec<Participant>,
        anchor: ResizeAnchor,
    ) -> Result<(), EngineError> {
        self.install(TransformSession::resize(participants, anchor))
    }

    /// Start a rotate session from the given pointer angle.
    ///
    /// # Errors
    ///
    /// [`EngineError::SessionActive`] if a gesture is already running;
    /// [`EngineError::NoParticipants`] for an empty participant list.
    pub fn start_rotate(
        &mut self,
        participants: Vec<Participant>,
        start_pointer_angle_deg: f64,
    ) -> Result<(), EngineError> {
        self.install(TransformSession::rotate(participants, start_pointer_angle_deg))
    }

    /// Feed one pointer-move into the active session.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSession`] when no gesture is active.
    pub fn update_session(
        &mut self,
        update: &SessionUpdate,
        sink: &mut dyn PreviewSink,
    ) -> Result<(), EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NoSession)?;
        session.update(update, &self.camera, &self.limits, &self.hooks, sink);
        Ok(())
    }

    /// Commit the active session, returning the actions for the host to apply.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSession`] when no gesture is active.
    pub fn commit_session(&mut self, sink: &mut dyn PreviewSink) -> Result<Vec<Action>, EngineError> {
        let session = self.session.take().ok_or(EngineError::NoSession)?;
        Ok(session.commit(&self.camera, &self.limits, &self.hooks, sink))
    }

    /// Cancel the active session (e.g. on Escape), reverting all previews.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSession`] when no gesture is active.
    pub fn cancel_session(&mut self, sink: &mut dyn PreviewSink) -> Result<(), EngineError> {
        let session = self.session.take().ok_or(EngineError::NoSession)?;
        session.cancel(sink);
        Ok(())
    }
}
