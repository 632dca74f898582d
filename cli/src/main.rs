//! UMASH CLI
//!
//! Keyed hashing of files and stdin.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{hash_files, keygen};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "umash")]
#[command(about = "Keyed almost-universal hashing with PCLMULQDQ acceleration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (stdin when empty)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Key blob produced by `umash keygen`; a fixed demo key when absent
    #[arg(short, long, value_name = "KEYFILE")]
    key: Option<PathBuf>,

    /// Hash seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Which of the two keyed functions to evaluate (non-zero selects the second)
    #[arg(short, long, default_value_t = 0)]
    which: u32,

    /// Print the 128-bit fingerprint instead of a single digest
    #[arg(short, long)]
    fingerprint: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh key blob from OS entropy
    Keygen {
        #[arg(value_name = "KEYFILE")]
        output: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Keygen { output }) => keygen(output),
        None => hash_files(
            &cli.files,
            cli.key.as_deref(),
            cli.seed,
            cli.which,
            cli.fingerprint,
        ),
    }
}
