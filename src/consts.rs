//! Shared numeric constants for the drawing engine.

// ── Zoom ────────────────────────────────────────────────────────

/// Viewport scale factor applied per wheel notch. Zooming out multiplies the
/// viewport extent by this value; zooming in divides by it.
pub const ZOOM_STEP: f64 = 1.1;

/// Smallest logical viewport width or height a zoom step may produce.
pub const MIN_VIEWPORT_EXTENT: f64 = 1e-3;

/// Largest logical viewport width or height a zoom step may produce.
pub const MAX_VIEWPORT_EXTENT: f64 = 1e9;

// ── Session defaults ────────────────────────────────────────────

/// Render surface width in pixels when none is configured.
pub const DEFAULT_SURFACE_WIDTH: f64 = 1280.0;

/// Render surface height in pixels when none is configured.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 720.0;

/// Brush width in logical units when none is configured.
pub const DEFAULT_BRUSH_WIDTH: f64 = 2.0;

/// Brush color when none is configured.
pub const DEFAULT_BRUSH_COLOR: &str = "#000000";
