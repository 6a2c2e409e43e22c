//! Bytepair CLI - Command-line interface for the BPE tokenizer.
//!
//! This is the main entry point for the `bytepair` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, StatsCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "bytepair")]
#[command(about = "A lossless byte-level BPE tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new tokenizer from text data
    Train(TrainCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
    /// Train on a file and report compression statistics
    Stats(StatsCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
    }

    Ok(())
}
