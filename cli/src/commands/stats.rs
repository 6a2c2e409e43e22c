//! Stats command implementation.
//!
//! Trains on a file in memory, encodes it with its own vocabulary, and
//! reports vocabulary size, learned merges, compression and round-trip
//! verification.

use clap::Parser;

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    /// Path to the input text file
    #[arg(short, long)]
    pub input: String,

    /// Cap on the number of merges to learn
    #[arg(long)]
    pub max_merges: Option<usize>,
}

use anyhow::Result as AnyhowResult;
use bytepair::Tokenizer;
use std::fs;
use std::time::Instant;

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let data = fs::read_to_string(&cmd.input)?;
    println!("Input: {}", cmd.input);
    println!(
        "  Length: {} characters, {} bytes",
        data.chars().count(),
        data.len()
    );
    println!();

    let mut builder = Tokenizer::builder();
    if let Some(cap) = cmd.max_merges {
        builder = builder.max_merges(cap);
    }
    let mut tokenizer = builder.build();

    let start = Instant::now();
    tokenizer.train(&data)?;
    println!("Training: {:.2}s", start.elapsed().as_secs_f64());
    println!("  Vocabulary size: {} tokens", tokenizer.vocab_size());
    println!("  Learned merges: {}", tokenizer.vocab().merge_count());
    println!();

    let start = Instant::now();
    let encoding = tokenizer.encode(&data);
    println!("Encoding: {:.2}s", start.elapsed().as_secs_f64());
    println!("  Token count: {}", encoding.len());
    println!(
        "  Compression: {:.1}% ({} bytes -> {} tokens)",
        encoding.compression_ratio() * 100.0,
        data.len(),
        encoding.len()
    );
    println!();

    let decoded = tokenizer.decode(&encoding.ids)?;
    if decoded == data {
        println!("Round-trip: OK");
    } else {
        println!("Round-trip: MISMATCH");
        println!("  Expected length: {}", data.len());
        println!("  Got length: {}", decoded.len());
    }

    Ok(())
}
