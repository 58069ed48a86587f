//! Interactive geometry engine for a visual page-layout editor.
//!
//! This crate computes rotated bounding geometry for placed elements,
//! converts between on-screen (editor) and stored (data) coordinate spaces,
//! drives live drag/resize/rotate sessions for single and multi-element
//! selections, enforces page-boundary and aspect-ratio constraints, and
//! aligns/distributes a selection against a reference rectangle. The host
//! application owns the element records and the rendering layer; the engine
//! only returns sparse property updates and preview deltas.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] facade and session actions |
//! | [`element`] | Element records, sparse updates, props bag |
//! | [`geometry`] | Rotated bounding frames, corners, union rects |
//! | [`camera`] | Editor↔data coordinate conversion and rounding |
//! | [`limits`] | Page constraint set with bleed/danger-zone ranges |
//! | [`bounds`] | Selection bound rects and allowed position ranges |
//! | [`arrange`] | Alignment and distribution of a selection |
//! | [`session`] | Drag/resize/rotate gesture state machine |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | [`error::EngineError`] |

pub mod arrange;
pub mod bounds;
pub mod camera;
pub mod consts;
pub mod element;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod limits;
pub mod session;

pub use crate::element::{Element, ElementId, ElementKind, PartialElement, Updates};
pub use crate::engine::Engine;
pub use crate::error::EngineError;
pub use crate::geometry::{BoundRect, Frame};
pub use crate::session::{Action, Participant, PreviewSink};
