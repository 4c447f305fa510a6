use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sketchpad::config::{
    ConfigError, ENV_BRUSH_COLOR, ENV_BRUSH_WIDTH, ENV_MODE, ENV_SURFACE_HEIGHT, ENV_SURFACE_WIDTH, SessionConfig,
    parse_mode,
};
use sketchpad::consts::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use sketchpad::engine::Session;
use sketchpad::replay::{self, ReplayError};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error("failed to encode summary: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Replay a JSON script of input events through a drawing session.
///
/// Each flag falls back to its `SKETCHPAD_*` environment variable, then to the
/// built-in default. A flag given on the command line wins even when the
/// variable holds garbage.
#[derive(Parser, Debug)]
#[command(name = "sketchpad", about = "Replay scripted input through the sketchpad engine")]
struct Cli {
    /// Path to a JSON array of input events, or `-` for stdin.
    script: PathBuf,

    #[arg(long, env = ENV_SURFACE_WIDTH, default_value_t = DEFAULT_SURFACE_WIDTH)]
    surface_width: f64,

    #[arg(long, env = ENV_SURFACE_HEIGHT, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    surface_height: f64,

    #[arg(long, env = ENV_BRUSH_WIDTH, default_value_t = DEFAULT_BRUSH_WIDTH)]
    brush_width: f64,

    #[arg(long, env = ENV_BRUSH_COLOR, default_value = DEFAULT_BRUSH_COLOR)]
    brush_color: String,

    /// Initial mode: `draw` or `erase`.
    #[arg(long, env = ENV_MODE, default_value = "draw")]
    mode: String,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let mode = parse_mode(Some(self.mode.trim()))?;
        SessionConfig::new(
            self.surface_width,
            self.surface_height,
            self.brush_width,
            self.brush_color.clone(),
            mode,
        )
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = cli.session_config()?;
    tracing::info!(
        surface_width = config.surface.width(),
        surface_height = config.surface.height(),
        mode = ?config.mode,
        "session configured"
    );

    let events = if cli.script.as_os_str() == "-" {
        replay::load_script(io::stdin().lock())?
    } else {
        let file = File::open(&cli.script).map_err(|source| CliError::Open { path: cli.script.clone(), source })?;
        replay::load_script(BufReader::new(file))?
    };

    let mut session = Session::new(config);
    let summary = replay::replay(&mut session, events)?;
    tracing::info!(
        strokes = summary.strokes,
        erased = summary.strokes_erased,
        events = summary.events,
        "replay finished"
    );

    Ok(serde_json::to_string_pretty(&summary)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            ExitCode::FAILURE
        }
    }
}
