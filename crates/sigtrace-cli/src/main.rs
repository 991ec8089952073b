//! sigtrace CLI - Command-line interface for deterministic trace generation
//!
//! This binary provides commands for validating trace specs and generating
//! clean/noisy/filtered trace files from them.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use sigtrace_cli::commands;

/// sigtrace - Deterministic Signal Trace Generation
#[derive(Parser)]
#[command(name = "sigtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a spec file without generating traces
    Validate {
        /// Path to the spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate trace files from a spec file
    Generate {
        /// Path to the spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Override the spec's RNG seed
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Generate {
            spec,
            out_root,
            seed,
            json,
        } => commands::generate::run(&spec, out_root.as_deref(), seed, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
