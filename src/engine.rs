//! Drawing session: routes typed input to the canvas and viewport.
//!
//! A [`Session`] owns all mutable drawing state for one surface. Each input
//! handler runs synchronously, applies its mutation, and returns the
//! [`Action`]s the host needs to re-render. An empty vector means nothing
//! observable changed.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::config::SessionConfig;
use crate::eraser;
use crate::geometry::{Point, Segment};
use crate::input::{Button, InputEvent, InputState, Mode};
use crate::stroke::{Brush, BrushError, Stroke, StrokeId};
use crate::viewport::{Surface, Viewport, ViewportError};

/// Mutations reported to the host after handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new stroke was added on top of the canvas.
    StrokeStarted(StrokeId),
    /// A `LineTo` was appended to the stroke.
    StrokeExtended(StrokeId),
    /// The draw gesture for the stroke ended.
    StrokeFinished(StrokeId),
    /// These strokes were removed, in draw order.
    StrokesErased(Vec<StrokeId>),
    /// The visible viewport moved or rescaled.
    ViewportChanged(Viewport),
}

/// Errors produced when applying a configuration event.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Brush(#[from] BrushError),

    #[error(transparent)]
    Surface(#[from] ViewportError),
}

/// One drawing session: canvas, viewport, surface, brush, mode, and the
/// active gesture.
#[derive(Debug, Clone)]
pub struct Session {
    canvas: Canvas,
    viewport: Viewport,
    surface: Surface,
    brush: Brush,
    mode: Mode,
    gesture: InputState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Start a session with an empty canvas and a viewport fitted 1:1 to the surface.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            canvas: Canvas::new(),
            viewport: Viewport::fit(config.surface),
            surface: config.surface,
            brush: config.brush,
            mode: config.mode,
            gesture: InputState::Idle,
        }
    }

    // --- Configuration ---

    /// Set the primary-button mode. Takes effect at the next pointer-down.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Flip between draw and erase, returning the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Set the brush used for strokes started from now on. Existing strokes keep theirs.
    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    /// Update the render surface size. The viewport is left as is.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    // --- Input events ---

    /// Dispatch a typed input event.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when a `SetBrush` or `Resize` event carries
    /// invalid values; session state is left unchanged in that case.
    pub fn handle(&mut self, event: InputEvent) -> Result<Vec<Action>, SessionError> {
        let actions = match event {
            InputEvent::PointerDown { x, y, button } => self.on_pointer_down(Point::new(x, y), button),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(Point::new(x, y)),
            InputEvent::PointerUp { x, y, button } => self.on_pointer_up(Point::new(x, y), button),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::Wheel { x, y, delta } => self.on_wheel(Point::new(x, y), delta),
            InputEvent::SetMode { mode } => {
                self.set_mode(mode);
                Vec::new()
            }
            InputEvent::ToggleMode => {
                self.toggle_mode();
                Vec::new()
            }
            InputEvent::SetBrush { width, color } => {
                self.set_brush(Brush::new(width, color)?);
                Vec::new()
            }
            InputEvent::Resize { width, height } => {
                self.set_surface(Surface::new(width, height)?);
                Vec::new()
            }
        };
        Ok(actions)
    }

    /// Begin a gesture. Ignored while another gesture is active.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if !self.gesture.is_idle() {
            debug!(?button, gesture = ?self.gesture, "pointer-down ignored; gesture in progress");
            return Vec::new();
        }

        match (button, self.mode) {
            (Button::Primary, Mode::Draw) => {
                let world = self.to_logical(screen_pt);
                let id = self.canvas.push(Stroke::begin(world, self.brush.clone()));
                self.gesture = InputState::Drawing { id };
                debug!(%id, x = world.x, y = world.y, "stroke started");
                vec![Action::StrokeStarted(id)]
            }
            (Button::Primary, Mode::Erase) => {
                let world = self.to_logical(screen_pt);
                self.gesture = InputState::Erasing { last_logical: world };
                debug!(x = world.x, y = world.y, "erase started");
                Vec::new()
            }
            (Button::Secondary, _) => {
                self.gesture = InputState::Panning { last_screen: screen_pt };
                debug!(x = screen_pt.x, y = screen_pt.y, "pan started");
                Vec::new()
            }
            (Button::Middle, _) => Vec::new(),
        }
    }

    /// Advance the active gesture to a new pointer position.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.gesture {
            InputState::Idle => Vec::new(),
            InputState::Drawing { id } => {
                let world = self.to_logical(screen_pt);
                let Some(stroke) = self.canvas.get_mut(&id) else {
                    // Stroke vanished under an active draw; drop the gesture.
                    self.gesture = InputState::Idle;
                    return Vec::new();
                };
                stroke.line_to(world);
                vec![Action::StrokeExtended(id)]
            }
            InputState::Erasing { last_logical } => {
                let world = self.to_logical(screen_pt);
                self.gesture = InputState::Erasing { last_logical: world };
                let removed = eraser::erase(&mut self.canvas, Segment::new(last_logical, world));
                if removed.is_empty() {
                    Vec::new()
                } else {
                    info!(count = removed.len(), remaining = self.canvas.len(), "strokes erased");
                    vec![Action::StrokesErased(removed)]
                }
            }
            InputState::Panning { last_screen } => {
                self.viewport.pan(last_screen, screen_pt, self.surface);
                self.gesture = InputState::Panning { last_screen: screen_pt };
                vec![Action::ViewportChanged(self.viewport)]
            }
        }
    }

    /// End the active gesture if `button` is the one that started it.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button) -> Vec<Action> {
        if self.gesture.button() != Some(button) {
            return Vec::new();
        }
        self.end_gesture()
    }

    /// End whatever gesture is active. Hosts deliver this on pointer-leave and focus loss.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    /// Zoom one step about the pointer's logical position.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: f64) -> Vec<Action> {
        let cursor = self.to_logical(screen_pt);
        if self.viewport.zoom_about(delta, cursor) {
            vec![Action::ViewportChanged(self.viewport)]
        } else {
            Vec::new()
        }
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        let ended = std::mem::take(&mut self.gesture);
        if !ended.is_idle() {
            debug!(gesture = ?ended, "gesture ended");
        }
        match ended {
            InputState::Drawing { id } => vec![Action::StrokeFinished(id)],
            InputState::Idle | InputState::Erasing { .. } | InputState::Panning { .. } => Vec::new(),
        }
    }

    fn to_logical(&self, screen_pt: Point) -> Point {
        self.viewport.screen_to_logical(screen_pt, self.surface)
    }

    // --- Queries ---

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// The gesture currently in progress.
    #[must_use]
    pub fn gesture(&self) -> InputState {
        self.gesture
    }

    /// Logical coordinates of a screen point under the current viewport.
    #[must_use]
    pub fn screen_to_logical(&self, screen_pt: Point) -> Point {
        self.to_logical(screen_pt)
    }
}
