//! Quill - a terminal text workspace with a capture buffer
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use quill_app::config::{default_config_path, init_config_file, load_settings, Settings};
use quill_app::Workspace;
use quill_core::prelude::*;

/// Quill - compose longer text in a capture buffer, then drop it where you were
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "A terminal text workspace with a capture buffer", long_about = None)]
struct Args {
    /// File to edit (created on first write if missing)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.clone().or_else(default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            return Err(Error::config("No config directory on this platform; use --config"));
        };
        if init_config_file(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("{} already exists, left unchanged", path.display());
        }
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    quill_core::logging::init()?;

    let settings = match &config_path {
        Some(path) => load_settings(path),
        None => Settings::default(),
    };

    let workspace = match &args.path {
        Some(path) => {
            info!("Opening {}", path.display());
            Workspace::with_file(path)
                .with_context(|| format!("Failed to open {}", path.display()))?
        }
        None => Workspace::new(),
    };

    let result = quill_tui::run(workspace, settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}
