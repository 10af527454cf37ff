mod script;
mod session;


use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::script::ScriptError;
use crate::session::{Session, SessionConfig};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to read script: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Editor(#[from] canvas::editor::EditorError),
    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "draftboard", about = "Replay an input script through the drawing editor")]
struct Cli {
    /// Script file to replay; stdin when omitted.
    script: Option<PathBuf>,

    #[arg(long, env = "DRAFTBOARD_CANVAS_WIDTH", default_value_t = canvas::consts::DEFAULT_CANVAS_WIDTH, value_parser = canvas_size)]
    canvas_width: f64,

    #[arg(long, env = "DRAFTBOARD_CANVAS_HEIGHT", default_value_t = canvas::consts::DEFAULT_CANVAS_HEIGHT, value_parser = canvas_size)]
    canvas_height: f64,

    #[arg(long, env = "DRAFTBOARD_TOOL", default_value = "select")]
    tool: String,

    #[arg(long, env = "DRAFTBOARD_PAGE", default_value = "page 1")]
    page: String,

    #[arg(long, env = "DRAFTBOARD_SURFACE", default_value = "svgroot")]
    surface: String,

    /// Log filter directives, e.g. `canvas=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log: String,
}

/// Canvas sizes must be positive and finite.
fn canvas_size(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("`{raw}` is not a number: {e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("canvas size must be a positive number, got `{raw}`"))
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let inputs = script::parse(&source)?;

    let config = SessionConfig {
        canvas_width: cli.canvas_width,
        canvas_height: cli.canvas_height,
        tool: cli.tool,
        page: cli.page,
        surface: cli.surface,
    };
    let mut session = Session::start(&config)?;
    tracing::info!(inputs = inputs.len(), tool = %config.tool, "replaying script");
    for input in inputs {
        session.apply(input);
    }
    tracing::info!(renders = session.editor().engine().render_count(), "script replayed");

    let rendered = serde_json::to_string_pretty(&session.summary())?;
    println!("{rendered}");
    Ok(())
}
