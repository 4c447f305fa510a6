//! Eraser: remove whole strokes crossed by the pointer's sweep segment.
//!
//! Each pointer-move while erasing produces one sweep segment from the
//! previous logical pointer position to the current one. A stroke is removed
//! only when one of its own segments crosses the sweep; the bounding box is
//! just a cheap pre-filter.

#[cfg(test)]
#[path = "eraser_test.rs"]
mod eraser_test;

use tracing::debug;

use crate::canvas::Canvas;
use crate::geometry::{Segment, segment_intersects_rect, segments_intersect};
use crate::stroke::{Stroke, StrokeId};

/// Whether `sweep` erases `stroke`.
#[must_use]
pub fn stroke_hit(stroke: &Stroke, sweep: Segment) -> bool {
    let Some(bbox) = stroke.bounding_box() else {
        return false;
    };
    if !segment_intersects_rect(sweep, bbox) {
        return false;
    }
    stroke.segments().any(|seg| segments_intersect(sweep, seg))
}

/// Remove every stroke hit by `sweep` and return the removed ids in draw order.
pub fn erase(canvas: &mut Canvas, sweep: Segment) -> Vec<StrokeId> {
    let removed = canvas.remove_where(|stroke| stroke_hit(stroke, sweep));
    if !removed.is_empty() {
        debug!(
            count = removed.len(),
            from_x = sweep.start.x,
            from_y = sweep.start.y,
            to_x = sweep.end.x,
            to_y = sweep.end.y,
            "erased strokes"
        );
    }
    removed
}
