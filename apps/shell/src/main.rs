#![allow(clippy::print_stderr, clippy::print_stdout)]

mod args;
mod commands;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use foundry::{Manifest, Registry};
use foundry_logger::LogSettings;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The manifest carries its own log settings, so it is read before logging starts.
    let (manifest, mut settings) = match &cli.command {
        Command::Create { config } => {
            let manifest = Manifest::load(config)
                .with_context(|| format!("Critical: manifest {} is malformed", config.display()))?;
            let settings = manifest.log.clone();
            (manifest, settings)
        },
        Command::List { .. } | Command::Info { .. } => {
            (Manifest::default(), LogSettings { level: "warn".to_owned(), ..LogSettings::default() })
        },
    };
    if let Some(level) = cli.log_level {
        settings = settings.with_level(level);
    }
    let _log = foundry_logger::init(env!("CARGO_PKG_NAME"), &settings)?;

    let registry = Registry::global();
    foundry::init(registry).context("Registering built-in objects")?;

    let mut out = io::stdout().lock();
    let result = match cli.command {
        Command::List { json } => commands::list(registry, json, &mut out),
        Command::Info { name, json } => commands::info(registry, &name, json, &mut out),
        Command::Create { .. } => commands::create(registry, &manifest, &mut out),
    };

    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "Command failed");
    }
    result
}
