//! Geometry and input engine for a freehand vector drawing surface.
//!
//! The crate owns everything between raw pointer input and canvas mutation:
//! translating screen events into logical coordinates, growing strokes while
//! drawing, erasing strokes whose segments cross the eraser sweep, and
//! panning/zooming the visible viewport. Rendering is left to the host, which
//! observes the returned [`engine::Action`]s and reads the canvas and viewport.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The drawing [`engine::Session`] and its emitted actions |
//! | [`canvas`] | Ordered in-memory stroke store |
//! | [`stroke`] | Strokes, brushes, and the segment iterator |
//! | [`eraser`] | Intersection-based stroke removal |
//! | [`geometry`] | Points, segments, rectangles, and intersection tests |
//! | [`viewport`] | Logical viewport, render surface, pan/zoom and coordinate mapping |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`config`] | Session defaults from the environment |
//! | [`replay`] | Headless replay of scripted input events |
//! | [`consts`] | Shared numeric constants (zoom step, extent limits, defaults) |

pub mod canvas;
pub mod config;
pub mod consts;
pub mod engine;
pub mod eraser;
pub mod geometry;
pub mod input;
pub mod replay;
pub mod stroke;
pub mod viewport;
