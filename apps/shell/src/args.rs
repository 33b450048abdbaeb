//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use foundry_logger::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "foundry")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Create objects by name from registered factories")]
pub(crate) struct Cli {
    /// Log level override (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List registered factories in name order
    List {
        /// Print metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the metadata of one factory
    Info {
        /// Registration name (e.g. 'file')
        name: String,

        /// Print metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build every object listed in a manifest
    Create {
        /// Manifest file (TOML, JSON or YAML)
        #[arg(short, long)]
        config: PathBuf,
    },
}
