//! Planar primitives and the intersection tests the eraser is built on.
//!
//! All tests here are total: parallel, collinear, and zero-length inputs
//! resolve to `false` rather than an error. No epsilon is applied, so boundary
//! cases are decided by plain float comparison.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A directed straight line from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
///
/// `width` and `height` are never negative for rectangles built through
/// [`Rect::from_points`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle containing every point, or `None` when there are none.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y })
    }

    /// The four boundary edges in the order top, bottom, left, right.
    #[must_use]
    pub fn edges(&self) -> [Segment; 4] {
        let left = self.x;
        let top = self.y;
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [
            Segment::new(Point::new(left, top), Point::new(right, top)),
            Segment::new(Point::new(left, bottom), Point::new(right, bottom)),
            Segment::new(Point::new(left, top), Point::new(left, bottom)),
            Segment::new(Point::new(right, top), Point::new(right, bottom)),
        ]
    }
}

/// Whether two segments cross or touch.
///
/// Solves `a.start + s·d1 = b.start + t·d2` by Cramer's rule and accepts when
/// both `s` and `t` fall in `[0, 1]`; touching at an endpoint counts.
///
/// A zero determinant returns `false`. That covers parallel lines, zero-length
/// segments, and collinear segments even when they overlap. The overlap gap
/// is acceptable for thin eraser sweeps but makes this unsuitable as a general
/// geometry predicate.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segments_intersect(a: Segment, b: Segment) -> bool {
    let d1x = a.end.x - a.start.x;
    let d1y = a.end.y - a.start.y;
    let d2x = b.end.x - b.start.x;
    let d2y = b.end.y - b.start.y;

    let det = d1x * d2y - d2x * d1y;
    if det == 0.0 {
        return false;
    }

    let dx = b.start.x - a.start.x;
    let dy = b.start.y - a.start.y;

    let s = (d2y * dx - d2x * dy) / det;
    let t = (d1y * dx - d1x * dy) / det;

    (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
}

/// Inclusive containment test on both axes.
#[must_use]
pub fn point_in_rect(p: Point, r: Rect) -> bool {
    p.x >= r.x && p.x <= r.x + r.width && p.y >= r.y && p.y <= r.y + r.height
}

/// Whether a segment touches a rectangle.
///
/// Only `seg.end` is tested for containment. The eraser passes consecutive
/// sweep segments, so the previous frame already tested this frame's start.
/// Keep that in mind before reusing this outside the eraser.
#[must_use]
pub fn segment_intersects_rect(seg: Segment, r: Rect) -> bool {
    point_in_rect(seg.end, r) || r.edges().into_iter().any(|edge| segments_intersect(seg, edge))
}
