//! In-memory stroke store.
//!
//! Strokes are kept in insertion order, which is also draw order: later
//! strokes render on top. The renderer walks [`Canvas::strokes`] front to back.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use crate::stroke::{Stroke, StrokeId};

/// Ordered collection of live strokes.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    strokes: Vec<Stroke>,
}

impl Canvas {
    /// Create an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self { strokes: Vec::new() }
    }

    /// Append a stroke on top of all existing strokes and return its id.
    pub fn push(&mut self, stroke: Stroke) -> StrokeId {
        let id = stroke.id();
        self.strokes.push(stroke);
        id
    }

    /// Return a reference to a stroke by id.
    #[must_use]
    pub fn get(&self, id: &StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.id() == *id)
    }

    /// Return a mutable reference to a stroke by id.
    pub fn get_mut(&mut self, id: &StrokeId) -> Option<&mut Stroke> {
        self.strokes.iter_mut().find(|s| s.id() == *id)
    }

    /// Remove a stroke by id, returning it if it was present.
    pub fn remove(&mut self, id: &StrokeId) -> Option<Stroke> {
        let idx = self.strokes.iter().position(|s| s.id() == *id)?;
        Some(self.strokes.remove(idx))
    }

    /// Remove every stroke matching `pred`, preserving the order of the rest.
    /// Returns the removed ids in draw order.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<StrokeId>
    where
        F: FnMut(&Stroke) -> bool,
    {
        let mut removed = Vec::new();
        self.strokes.retain(|s| {
            if pred(s) {
                removed.push(s.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// All strokes in draw order (bottom first).
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if the canvas holds no strokes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
