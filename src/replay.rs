//! Headless replay of scripted input events through a [`Session`].
//!
//! A script is a JSON array of [`InputEvent`]s. Replaying it exercises the same
//! code paths a live host would, and the resulting [`Summary`] describes the
//! final canvas and viewport without serializing the drawing itself.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::io::Read;

use serde::Serialize;
use tracing::{debug, warn};

use crate::engine::{Action, Session, SessionError};
use crate::input::{InputEvent, Mode};
use crate::viewport::Viewport;

/// Errors produced while loading or replaying a script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// The script could not be read.
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// The script was not a JSON array of input events.
    #[error("failed to parse script: {0}")]
    Json(#[from] serde_json::Error),

    /// An event in the script was rejected by the session.
    #[error("event {index} rejected: {source}")]
    Event {
        index: usize,
        #[source]
        source: SessionError,
    },
}

/// Counters and final state after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Events applied.
    pub events: usize,
    /// Strokes started during the replay.
    pub strokes_started: usize,
    /// Strokes removed by the eraser during the replay.
    pub strokes_erased: usize,
    /// Strokes left on the canvas.
    pub strokes: usize,
    /// Line segments across all remaining strokes.
    pub segments: usize,
    /// Mode at the end of the replay.
    pub mode: Mode,
    /// Viewport at the end of the replay.
    pub viewport: Viewport,
}

/// Parse a script from any reader.
///
/// # Errors
///
/// Returns [`ReplayError::Io`] or [`ReplayError::Json`] when the script cannot
/// be read or is not an array of input events.
pub fn load_script<R: Read>(mut reader: R) -> Result<Vec<InputEvent>, ReplayError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let events: Vec<InputEvent> = serde_json::from_str(&raw)?;
    debug!(count = events.len(), "script loaded");
    Ok(events)
}

/// Apply every event in order and summarize the result.
///
/// # Errors
///
/// Stops at the first event the session rejects and returns
/// [`ReplayError::Event`] with its index. Events before it stay applied.
pub fn replay<I>(session: &mut Session, events: I) -> Result<Summary, ReplayError>
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut applied = 0;
    let mut strokes_started = 0;
    let mut strokes_erased = 0;

    for (index, event) in events.into_iter().enumerate() {
        let actions = session.handle(event).map_err(|source| {
            warn!(index, error = %source, "replay event rejected");
            ReplayError::Event { index, source }
        })?;
        for action in &actions {
            debug!(index, ?action, "action");
            match action {
                Action::StrokeStarted(_) => strokes_started += 1,
                Action::StrokesErased(ids) => strokes_erased += ids.len(),
                Action::StrokeExtended(_) | Action::StrokeFinished(_) | Action::ViewportChanged(_) => {}
            }
        }
        applied += 1;
    }

    Ok(summarize(session, applied, strokes_started, strokes_erased))
}

fn summarize(session: &Session, events: usize, strokes_started: usize, strokes_erased: usize) -> Summary {
    let canvas = session.canvas();
    Summary {
        events,
        strokes_started,
        strokes_erased,
        strokes: canvas.len(),
        segments: canvas.strokes().iter().map(|s| s.segments().count()).sum(),
        mode: session.mode(),
        viewport: session.viewport(),
    }
}
