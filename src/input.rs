//! Input model: mode, mouse buttons, typed input events, and the gesture state machine.
//!
//! `Mode` captures what a primary-button drag does. `InputEvent` is the typed
//! form of everything the host forwards. `InputState` is the one active
//! gesture tracked between pointer-down and pointer-up, carrying the context
//! needed to compute the next incremental step.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::stroke::StrokeId;

/// What a primary-button drag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Paint a new stroke (default).
    #[default]
    Draw,
    /// Remove strokes crossed by the pointer.
    Erase,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Draw => Self::Erase,
            Self::Erase => Self::Draw,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button: draws or erases depending on [`Mode`].
    Primary,
    /// Middle mouse button. Not bound to any gesture.
    Middle,
    /// Right mouse button: pans the viewport.
    Secondary,
}

/// A typed input event, as forwarded by the host or read from a replay script.
///
/// Pointer coordinates are screen pixels relative to the surface's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64, button: Button },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64, button: Button },
    /// Pointer left the surface or the window lost focus.
    PointerLeave,
    /// Vertical scroll; positive `delta` scrolls down (zooms out).
    Wheel { x: f64, y: f64, delta: f64 },
    SetMode { mode: Mode },
    ToggleMode,
    SetBrush { width: f64, color: String },
    Resize { width: f64, height: f64 },
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is painting a stroke.
    Drawing {
        /// Id of the stroke receiving `LineTo` commands.
        id: StrokeId,
    },
    /// The user is sweeping the eraser.
    Erasing {
        /// Logical position of the previous pointer event; start of the next sweep.
        last_logical: Point,
    },
    /// The user is panning the viewport.
    Panning {
        /// Screen position of the previous pointer event, used to compute the pan delta.
        last_screen: Point,
    },
}

impl InputState {
    /// The button that started this gesture, or `None` when idle.
    #[must_use]
    pub fn button(&self) -> Option<Button> {
        match self {
            Self::Idle => None,
            Self::Drawing { .. } | Self::Erasing { .. } => Some(Button::Primary),
            Self::Panning { .. } => Some(Button::Secondary),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
