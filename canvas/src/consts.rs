//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 3.0;

/// Multiplicative step applied by a single zoom-in / zoom-out.
pub const ZOOM_STEP: f64 = 1.2;

// ── Layout ──────────────────────────────────────────────────────

/// World-space x of the scatter center (the user's own location marker).
pub const LAYOUT_CENTER_X: f64 = 400.0;

/// World-space y of the scatter center.
pub const LAYOUT_CENTER_Y: f64 = 300.0;

/// Minimum distance of a marker from the scatter center.
pub const LAYOUT_BASE_RADIUS: f64 = 100.0;

/// Extra radius spread added on top of the base radius.
pub const LAYOUT_RADIUS_JITTER: f64 = 150.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space click tolerance in pixels around a marker center.
pub const HIT_TOLERANCE_PX: f64 = 20.0;

// ── Markers ─────────────────────────────────────────────────────

/// Marker radius in world units.
pub const MARKER_RADIUS: f64 = 16.0;

/// Marker radius for the selected entity.
pub const SELECTED_MARKER_RADIUS: f64 = 20.0;

/// Gap between the selected marker and its dashed ring.
pub const SELECTION_RING_GAP: f64 = 6.0;

/// Radius of the fixed user-location dot.
pub const USER_MARKER_RADIUS: f64 = 8.0;

// ── Background ──────────────────────────────────────────────────

/// Spacing between background grid lines in world units.
pub const GRID_SPACING: f64 = 50.0;

/// Number of grid lines drawn along each axis.
pub const GRID_LINES: u32 = 20;

/// Extent of the painted map area along each axis in world units.
pub const MAP_EXTENT: f64 = 1000.0;
