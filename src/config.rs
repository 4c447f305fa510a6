//! Session configuration parsed from environment variables.

use crate::consts::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::input::Mode;
use crate::stroke::{Brush, BrushError};
use crate::viewport::{Surface, ViewportError};

pub const ENV_SURFACE_WIDTH: &str = "SKETCHPAD_SURFACE_WIDTH";
pub const ENV_SURFACE_HEIGHT: &str = "SKETCHPAD_SURFACE_HEIGHT";
pub const ENV_BRUSH_WIDTH: &str = "SKETCHPAD_BRUSH_WIDTH";
pub const ENV_BRUSH_COLOR: &str = "SKETCHPAD_BRUSH_COLOR";
pub const ENV_MODE: &str = "SKETCHPAD_MODE";

/// Errors produced while building a [`SessionConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },

    /// The surface size was rejected.
    #[error("invalid surface: {0}")]
    Surface(#[from] ViewportError),

    /// The brush attributes were rejected.
    #[error("invalid brush: {0}")]
    Brush(#[from] BrushError),
}

/// Initial state for a drawing session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionConfig {
    pub surface: Surface,
    pub brush: Brush,
    pub mode: Mode,
}

impl SessionConfig {
    /// Build and validate a config from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the surface or brush is invalid.
    pub fn new(
        surface_width: f64,
        surface_height: f64,
        brush_width: f64,
        brush_color: impl Into<String>,
        mode: Mode,
    ) -> Result<Self, ConfigError> {
        let surface = Surface::new(surface_width, surface_height)?;
        let brush = Brush::new(brush_width, brush_color)?;
        Ok(Self { surface, brush, mode })
    }

    /// Build typed session config from environment variables.
    ///
    /// Optional:
    /// - `SKETCHPAD_SURFACE_WIDTH`: default 1280
    /// - `SKETCHPAD_SURFACE_HEIGHT`: default 720
    /// - `SKETCHPAD_BRUSH_WIDTH`: default 2
    /// - `SKETCHPAD_BRUSH_COLOR`: default `#000000`
    /// - `SKETCHPAD_MODE`: `draw` (default) or `erase`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparsable, or when
    /// the resulting surface or brush is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let surface_width = env_parse_f64(ENV_SURFACE_WIDTH, DEFAULT_SURFACE_WIDTH)?;
        let surface_height = env_parse_f64(ENV_SURFACE_HEIGHT, DEFAULT_SURFACE_HEIGHT)?;
        let brush_width = env_parse_f64(ENV_BRUSH_WIDTH, DEFAULT_BRUSH_WIDTH)?;
        let brush_color = std::env::var(ENV_BRUSH_COLOR).unwrap_or_else(|_| DEFAULT_BRUSH_COLOR.to_string());
        let mode = match std::env::var(ENV_MODE) {
            Ok(raw) => parse_mode(Some(raw.trim()))?,
            Err(_) => Mode::default(),
        };

        Self::new(surface_width, surface_height, brush_width, brush_color, mode)
    }
}

fn env_parse_f64(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::Parse { var, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Parse a mode name. `None` yields the default mode.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for anything other than `draw` or `erase`.
pub fn parse_mode(raw: Option<&str>) -> Result<Mode, ConfigError> {
    match raw.unwrap_or("draw") {
        "draw" => Ok(Mode::Draw),
        "erase" => Ok(Mode::Erase),
        other => Err(ConfigError::Parse { var: ENV_MODE, value: other.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
