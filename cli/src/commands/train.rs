//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training data file
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: String,

    /// Minimum pair frequency for merges
    #[arg(short, long, default_value_t = 2)]
    pub min_frequency: u64,

    /// Cap on the number of merges to learn
    #[arg(long)]
    pub max_merges: Option<usize>,
}

use anyhow::Result as AnyhowResult;
use bytepair::{TrainOutcome, Tokenizer};
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    println!("Training tokenizer...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Min frequency: {}", cmd.min_frequency);
    if let Some(cap) = cmd.max_merges {
        println!("  Max merges: {}", cap);
    }
    println!();

    // Read training data
    let start = Instant::now();
    let data = fs::read_to_string(&cmd.input)?;
    println!(
        "Read {} bytes in {:.2}s",
        data.len(),
        start.elapsed().as_secs_f64()
    );
    println!();

    // Build and train
    let mut builder = Tokenizer::builder().min_frequency(cmd.min_frequency);
    if let Some(cap) = cmd.max_merges {
        builder = builder.max_merges(cap);
    }
    let mut tokenizer = builder.build();

    let start = Instant::now();
    let outcome = tokenizer.train(&data)?;
    println!(
        "Training completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("Vocabulary size: {} tokens", tokenizer.vocab_size());
    println!("Learned merges: {}", tokenizer.vocab().merge_count());
    if outcome == TrainOutcome::MergeCapReached {
        println!("Note: merge cap reached before convergence");
    }
    println!();

    // Save model
    let output_path = Path::new(&cmd.output);
    tokenizer.save(output_path)?;
    println!("Model saved to {}", cmd.output);

    Ok(())
}
