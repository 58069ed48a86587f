//! Shared numeric constants for the layout engine.

// ── Page geometry ───────────────────────────────────────────────

/// Default page width in data pixels.
pub const DEFAULT_PAGE_WIDTH: f64 = 412.0;

/// Default page height in data pixels.
pub const DEFAULT_PAGE_HEIGHT: f64 = 618.0;

/// Width-to-height ratio of the full-bleed area (9:16 portrait).
pub const FULLBLEED_RATIO: f64 = 9.0 / 16.0;

// ── Element size bounds (data pixels) ───────────────────────────

/// Smallest width or height an element may be committed at.
pub const ELEMENT_SIZE_MIN: f64 = 20.0;

/// Largest width or height an element may be committed at.
pub const ELEMENT_SIZE_MAX: f64 = 2000.0;

// ── Rotation ────────────────────────────────────────────────────

/// Informational rotation bounds; rotation is normalised mod 360, not clamped.
pub const ROTATION_MIN_DEG: f64 = -360.0;
pub const ROTATION_MAX_DEG: f64 = 360.0;

/// Angular step the rotate gesture snaps to while the snap modifier is held.
pub const ROTATION_SNAP_STEP_DEG: f64 = 30.0;

// ── Session commit thresholds ───────────────────────────────────

/// Net movement below one data pixel commits as a no-op.
pub const ZERO_SNAP_DATA_PX: f64 = 1.0;

/// Fraction of the page a dragged media element must cover to be promoted
/// to the page background.
pub const BACKGROUND_COVERAGE_RATIO: f64 = 0.995;
