//! Matamazon command-line entry point.
//!
//! Loads an optional catalog, executes a command log, then writes the orders export and,
//! when asked, the resulting catalog.

use anyhow::{Context, Result};
use clap::Parser;
use matamazon::commands::run_log;
use matamazon::Matamazon;
use resource_store::setup_tracing;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;

/// Executes a command log against the catalog and exports the results
#[derive(Parser, Debug)]
#[command(name = "matamazon", version, about)]
struct Args {
    /// Command log to execute, one command per line
    #[arg(short = 'l', value_name = "LOG")]
    log: PathBuf,

    /// Catalog file to load before running the log
    #[arg(short = 's', value_name = "SYSTEM")]
    system: Option<PathBuf>,

    /// Where to write the orders export (stdout when omitted)
    #[arg(short = 'o', value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Where to write the catalog after the log has run
    #[arg(long = "os", value_name = "SYSTEM_OUT")]
    out_system: Option<PathBuf>,
}

fn main() -> Result<()> {
    setup_tracing();
    let args = Args::parse();

    let mut system = match &args.system {
        Some(path) => Matamazon::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Matamazon::new(),
    };

    let log = File::open(&args.log)
        .with_context(|| format!("Failed to open command log {}", args.log.display()))?;
    let stdout = io::stdout();
    run_log(&mut system, BufReader::new(log), &mut stdout.lock())
        .with_context(|| format!("Failed to execute command log {}", args.log.display()))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            system
                .export_orders(BufWriter::new(file))
                .with_context(|| format!("Failed to export orders to {}", path.display()))?;
        }
        None => system
            .export_orders(io::stdout().lock())
            .context("Failed to export orders to stdout")?,
    }

    if let Some(path) = &args.out_system {
        system
            .export_to_file(path)
            .with_context(|| format!("Failed to export catalog to {}", path.display()))?;
    }

    info!(orders = system.ledger().len(), "Done");
    Ok(())
}
