//! # integral-cli
//!
//! Command-line launcher for the Integral Logistics Dashboard.
//!
//! ## Commands
//!
//! - `integral serve` - HTTP server with the embedded web UI
//! - `integral analyze --ul neg --ur pos --ll inc --lr neg` - One run in the terminal
//! - `integral datasets` - The quadrant and dataset catalog
//!
//! Configuration is layered: defaults, `integral.toml` (or `--config`), `.env`,
//! environment variables, then command-line flags. See [`AppConfig`].

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::AppConfig;

use anyhow::Result;
use commands::analyze::AnalyzeArgs;

/// Applies flags on top of `config` and runs the chosen command.
pub async fn run(cli: Cli, mut config: AppConfig) -> Result<()> {
    if let Some(dir) = cli.data_dir {
        config.data.dir = Some(dir);
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve::run_serve(&config).await
        }
        Commands::Analyze { ul, ur, ll, lr, json, no_preflight } => {
            if no_preflight {
                config.pipeline.preflight = false;
            }
            let pipeline = config.pipeline()?;
            commands::analyze::run_analyze(&pipeline, AnalyzeArgs { ul, ur, ll, lr, json }).await
        }
        Commands::Datasets => {
            let source = config.datasets().describe();
            commands::datasets::run_datasets(&source);
            Ok(())
        }
    }
}
