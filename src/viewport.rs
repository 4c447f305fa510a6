//! Viewport: the logical rectangle currently mapped onto the render surface.
//!
//! The mapping between screen pixels and logical coordinates is a per-axis
//! scale and offset derived from the live viewport and surface sizes. It is
//! recomputed on every call and never cached.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::Serialize;
use tracing::debug;

use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MAX_VIEWPORT_EXTENT, MIN_VIEWPORT_EXTENT, ZOOM_STEP};
use crate::geometry::{Point, Rect};

/// Errors produced when constructing a viewport or surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// Width or height was zero, negative, or not finite.
    #[error("extent must be positive and finite, got {width}x{height}")]
    NonPositiveExtent { width: f64, height: f64 },
}

fn check_extent(width: f64, height: f64) -> Result<(), ViewportError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(ViewportError::NonPositiveExtent { width, height })
    }
}

/// Pixel size of the render surface. Screen points are relative to its
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Surface {
    width: f64,
    height: f64,
}

impl Surface {
    /// # Errors
    ///
    /// Returns [`ViewportError::NonPositiveExtent`] unless both sides are
    /// positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, ViewportError> {
        check_extent(width, height)?;
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self { width: DEFAULT_SURFACE_WIDTH, height: DEFAULT_SURFACE_HEIGHT }
    }
}

/// Visible logical rectangle.
///
/// `x` / `y` are the logical coordinates of the surface's top-left corner;
/// `width` / `height` are the logical extent spanning the whole surface and
/// always stay strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// # Errors
    ///
    /// Returns [`ViewportError::NonPositiveExtent`] unless both extents are
    /// positive and finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        check_extent(width, height)?;
        Ok(Self { x, y, width, height })
    }

    /// A viewport at the logical origin matching the surface 1:1.
    #[must_use]
    pub fn fit(surface: Surface) -> Self {
        Self { x: 0.0, y: 0.0, width: surface.width, height: surface.height }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The viewport as a plain rectangle in logical space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Convert a screen-space point (surface pixels) to logical coordinates.
    #[must_use]
    pub fn screen_to_logical(&self, screen: Point, surface: Surface) -> Point {
        Point {
            x: self.x + screen.x * self.width / surface.width,
            y: self.y + screen.y * self.height / surface.height,
        }
    }

    /// Convert a logical point to screen coordinates (surface pixels).
    #[must_use]
    pub fn logical_to_screen(&self, logical: Point, surface: Surface) -> Point {
        Point {
            x: (logical.x - self.x) * surface.width / self.width,
            y: (logical.y - self.y) * surface.height / self.height,
        }
    }

    /// Pan so the content under `from` follows the pointer to `to`.
    ///
    /// Both points are in screen pixels. The pixel delta is scaled by the
    /// viewport-to-surface ratio on each axis so panning tracks the pointer at
    /// any zoom level.
    pub fn pan(&mut self, from: Point, to: Point, surface: Surface) {
        self.x += (from.x - to.x) * (self.width / surface.width);
        self.y += (from.y - to.y) * (self.height / surface.height);
    }

    /// Zoom one fixed step about `cursor` (logical), keeping that point at the
    /// same screen position.
    ///
    /// A positive `delta` zooms out; zero or negative zooms in. Returns `false`
    /// and leaves the viewport untouched when the step would push an extent
    /// outside the allowed range.
    ///
    /// The origin moves as `cursor - (cursor - origin) * scale`, which is the
    /// unique update that leaves `screen_to_logical(cursor)` unchanged.
    pub fn zoom_about(&mut self, delta: f64, cursor: Point) -> bool {
        let scale = zoom_scale(delta);
        let width = self.width * scale;
        let height = self.height * scale;

        let range = MIN_VIEWPORT_EXTENT..=MAX_VIEWPORT_EXTENT;
        if !range.contains(&width) || !range.contains(&height) {
            debug!(width, height, "zoom step rejected; extent out of range");
            return false;
        }

        self.x = cursor.x - (cursor.x - self.x) * scale;
        self.y = cursor.y - (cursor.y - self.y) * scale;
        self.width = width;
        self.height = height;
        true
    }
}

/// Extent multiplier for one wheel notch.
#[must_use]
pub fn zoom_scale(delta: f64) -> f64 {
    if delta > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP }
}
