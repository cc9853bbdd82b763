use clap::{Parser, Subcommand};
use integral_core::DatasetVariant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "integral")]
#[command(about = "Integral Logistics Dashboard", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./integral.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read datasets from this directory instead of the built-in set
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web dashboard
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one analysis and print the result
    Analyze {
        /// Dataset for the Individual Internal quadrant (neg, pos, inc)
        #[arg(long)]
        ul: Option<DatasetVariant>,

        /// Dataset for the Individual External quadrant
        #[arg(long)]
        ur: Option<DatasetVariant>,

        /// Dataset for the Collective Internal quadrant
        #[arg(long)]
        ll: Option<DatasetVariant>,

        /// Dataset for the Collective External quadrant
        #[arg(long)]
        lr: Option<DatasetVariant>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Skip the connectivity probe
        #[arg(long)]
        no_preflight: bool,
    },

    /// List quadrants and their datasets
    Datasets,
}
