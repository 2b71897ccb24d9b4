//! docdiff CLI
//!
//! Command-line interface for chunked document comparison

use clap::{Parser, Subcommand};
use docdiff_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "docdiff")]
#[command(about = "docdiff - Chunked word-level document comparison", long_about = None)]
struct Cli {
    /// Logging profile: dev, prod (JSON) or test; logs go to stderr
    #[arg(long, global = true, default_value = "dev")]
    log: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two documents and report word-level differences
    Compare(commands::compare::CompareArgs),
    /// Show how a document is chunked
    Chunk(commands::chunk::ChunkArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log);

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Chunk(args) => commands::chunk::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
