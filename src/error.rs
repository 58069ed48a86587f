//! Engine error types.
//!
//! Everything here is a programmer error in the calling layer: the engine is
//! pure computation with no I/O, so there is nothing to retry. Out-of-range
//! values are clamped rather than rejected and never surface as errors.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A bounding or min/max query was given an empty element list.
    #[error("selection is empty")]
    EmptySelection,

    /// A transform session was started with no participants.
    #[error("session has no participants")]
    NoParticipants,

    /// A transform session was started while another is active.
    #[error("a session is already active")]
    SessionActive,

    /// A session update/commit/cancel was issued with no active session.
    #[error("no active session")]
    NoSession,

    /// Distribution needs at least three elements to define interior gaps.
    #[error("cannot distribute {count} elements; need at least 3")]
    TooFewToDistribute { count: usize },
}
