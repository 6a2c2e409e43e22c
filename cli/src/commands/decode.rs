//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Token IDs to decode (comma-separated)
    #[arg(short = 'T', long)]
    pub tokens: String,
}

use anyhow::Result as AnyhowResult;
use bytepair::Tokenizer;
use std::path::Path;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)?;

    // Parse token IDs
    let ids: Vec<u32> = cmd
        .tokens
        .split(',')
        .map(|s| s.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;

    // Decode
    let text = tokenizer.decode(&ids)?;

    println!("{}", text);

    Ok(())
}
