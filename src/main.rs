//! Mapmaker -- renders a game state to an SVG map.
//!
//! Reads a state file, loads the game definition it names, and writes the
//! map to the given output path or to stdout.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mapmaker::render_state_file;

/// Render a Diplomacy-style game state as an SVG map
#[derive(Parser, Debug)]
#[command(name = "mapmaker")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// State file (YAML, or JSON with a .json extension)
    state: PathBuf,

    /// Output file (default: stdout)
    output: Option<PathBuf>,
}

fn write_output(output: Option<&PathBuf>, svg: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, svg),
        None => {
            let mut out = io::stdout().lock();
            out.write_all(svg.as_bytes())?;
            out.flush()
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout may carry the document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let doc = match render_state_file(&args.state) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!(state = %args.state.display(), error = %e, "render failed");
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_output(args.output.as_ref(), &doc.to_xml()) {
        eprintln!("error: failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
