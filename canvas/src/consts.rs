//! Shared numeric constants for the canvas crate.

// ── Viewport ────────────────────────────────────────────────────

/// Largest wheel delta honoured by a single zoom step.
pub const MAX_WHEEL_DELTA: f64 = 10.0;

/// Lower zoom bound. Zoom steps that would go below this clamp to it.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 10.0;

/// Canvas pixel width before the host reports a real size.
pub const DEFAULT_CANVAS_WIDTH: f64 = 400.0;

/// Canvas pixel height before the host reports a real size.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 400.0;

// ── Document ────────────────────────────────────────────────────

/// Endpoint B of a freshly created line, before any tool patches it.
pub const DEFAULT_LINE_END: f64 = 50.0;

// ── Tools ───────────────────────────────────────────────────────

/// Diagonal extent of the marker line the select tool drops at a click.
pub const SELECT_MARKER_EXTENT: f64 = 100.0;
