//! Strokes: ordered move/line commands plus the brush they were painted with.
//!
//! Geometry is never cached. Segments and bounding boxes are derived from the
//! command list on every call, so a stroke can be re-walked at any time and
//! an in-progress stroke always reflects its latest `LineTo`.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use uuid::Uuid;

use crate::consts::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH};
use crate::geometry::{Point, Rect, Segment};

/// Unique identifier for a stroke.
pub type StrokeId = Uuid;

/// One drawing command in a stroke's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new, disjoint subpath at the point.
    MoveTo(Point),
    /// Extend the current subpath to the point. Ignored when no subpath is open.
    LineTo(Point),
}

/// Errors produced when validating brush attributes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BrushError {
    /// Width was zero, negative, or not finite.
    #[error("brush width must be a positive finite number, got {0}")]
    InvalidWidth(f64),

    /// Color token was empty.
    #[error("brush color must not be empty")]
    EmptyColor,
}

/// Rendering attributes captured when a stroke is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    width: f64,
    color: String,
}

impl Brush {
    /// Validate and build a brush.
    ///
    /// # Errors
    ///
    /// Returns [`BrushError`] when `width` is not a positive finite number or
    /// `color` is empty.
    pub fn new(width: f64, color: impl Into<String>) -> Result<Self, BrushError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(BrushError::InvalidWidth(width));
        }
        let color = color.into();
        if color.trim().is_empty() {
            return Err(BrushError::EmptyColor);
        }
        Ok(Self { width, color })
    }

    /// Stroke width in logical units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Opaque color token (CSS color string, hex, etc.).
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self { width: DEFAULT_BRUSH_WIDTH, color: DEFAULT_BRUSH_COLOR.to_string() }
    }
}

/// A freehand stroke on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    brush: Brush,
    commands: Vec<PathCommand>,
}

impl Stroke {
    /// Open a new stroke with a single `MoveTo(start)`.
    #[must_use]
    pub fn begin(start: Point, brush: Brush) -> Self {
        Self { id: Uuid::new_v4(), brush, commands: vec![PathCommand::MoveTo(start)] }
    }

    /// Build a stroke from an arbitrary command list.
    ///
    /// The list is kept as given. A leading `LineTo` is tolerated and skipped
    /// by [`Stroke::segments`] and [`Stroke::bounding_box`].
    #[must_use]
    pub fn from_commands(brush: Brush, commands: Vec<PathCommand>) -> Self {
        Self { id: Uuid::new_v4(), brush, commands }
    }

    #[must_use]
    pub fn id(&self) -> StrokeId {
        self.id
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Append a `LineTo` to the stroke.
    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Iterate the stroke's line segments in path order.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        segments_of(&self.commands)
    }

    /// Axis-aligned hull of the stroke's honored points, ignoring brush width.
    ///
    /// `None` when the stroke has no honored point at all.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points(honored_points(&self.commands))
    }
}

/// Pull-based iterator over the line segments of a command list.
///
/// Yields one segment per `LineTo` that follows an open subpath. `MoveTo`
/// resets the current point and never yields.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    commands: std::slice::Iter<'a, PathCommand>,
    last: Option<Point>,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        for command in self.commands.by_ref() {
            match *command {
                PathCommand::MoveTo(p) => self.last = Some(p),
                PathCommand::LineTo(p) => {
                    if let Some(prev) = self.last.replace(p) {
                        return Some(Segment::new(prev, p));
                    }
                    self.last = None;
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.commands.len()))
    }
}

/// Segment iterator over a raw command list.
#[must_use]
pub fn segments_of(commands: &[PathCommand]) -> Segments<'_> {
    Segments { commands: commands.iter(), last: None }
}

/// Points that contribute geometry: every `MoveTo`, and each `LineTo` that has a
/// preceding point.
fn honored_points(commands: &[PathCommand]) -> impl Iterator<Item = Point> + '_ {
    let mut open = false;
    commands.iter().filter_map(move |command| match *command {
        PathCommand::MoveTo(p) => {
            open = true;
            Some(p)
        }
        PathCommand::LineTo(p) if open => Some(p),
        PathCommand::LineTo(_) => None,
    })
}
