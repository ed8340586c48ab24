//! vttpack CLI - Command-line tool for unpacking Foundry VTT compendium packs.
//!
//! This is the main entry point for the vttpack command-line application.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use vttpack::prelude::*;

/// vttpack - Foundry VTT compendium pack unpacker
#[derive(Parser)]
#[command(name = "vttpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack every pack store into JSON/YAML document files
    Unpack {
        /// Base directory, defaults to the current directory
        #[arg(short, long, env = "VTTPACK_PATH")]
        path: Option<PathBuf>,

        /// Packs directory, relative to the base directory
        #[arg(short, long, env = "VTTPACK_DIRECTORY", default_value = "packs")]
        directory: PathBuf,

        /// Write YAML instead of JSON
        #[arg(short, long)]
        yaml: bool,

        /// Output directory
        #[arg(short, long, env = "VTTPACK_OUTPUT", default_value = vttpack::DEFAULT_OUTPUT_ROOT)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Unpack {
            path,
            directory,
            yaml,
            output,
        } => {
            cmd_unpack(path, &directory, Format::from_yaml_flag(yaml), output)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_unpack(base: Option<PathBuf>, directory: &Path, format: Format, output: PathBuf) -> Result<()> {
    let base = match base {
        Some(base) => base,
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };
    let packs_dir = base.join(directory);

    let packs = discover_packs(&packs_dir).context("Failed to list pack directories")?;
    println!("Found {} packs in {}", packs.len(), packs_dir.display());

    let unpacker = PackUnpacker::new(UnpackOptions {
        format,
        output_root: output,
    });

    let style = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?;

    let start = Instant::now();
    let mut totals = UnpackStats::default();
    let mut failed = 0;

    for pack in &packs {
        let pb = ProgressBar::new_spinner();
        pb.set_style(style.clone());
        pb.set_message(pack.name.clone());

        let result = unpacker.unpack_dir(pack, |stats| {
            pb.set_message(format!(
                "{}: {} written, {} skipped",
                pack.name,
                stats.written,
                stats.skipped_documents()
            ));
            pb.tick();
        });
        pb.finish_and_clear();

        match result {
            Ok(stats) => {
                println!(
                    "{}: {} documents -> {} ({} skipped, {} missing children)",
                    pack.name,
                    stats.written,
                    unpacker.destination_for(&pack.name).display(),
                    stats.skipped_documents(),
                    stats.hydration_failures
                );
                totals.written += stats.written;
                totals.unknown_collection += stats.unknown_collection;
                totals.decode_failures += stats.decode_failures;
                totals.write_failures += stats.write_failures;
                totals.hydration_failures += stats.hydration_failures;
            }
            Err(e) => {
                tracing::error!(pack = %pack.name, error = %e, "cannot unpack pack");
                failed += 1;
            }
        }
    }

    println!(
        "Unpacked {} documents from {} packs in {:?} ({} skipped)",
        totals.written,
        packs.len() - failed,
        start.elapsed(),
        totals.skipped_documents()
    );

    if failed > 0 {
        anyhow::bail!("{} of {} packs could not be opened or read", failed, packs.len());
    }

    Ok(())
}
