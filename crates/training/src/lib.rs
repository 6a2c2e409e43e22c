//! Bytepair-training - BPE training infrastructure
//!
//! This crate provides the training loop that learns merge rules from text:
//! adjacent-pair frequency counting (sequential or parallel) and the
//! iterative most-frequent-pair merging that populates a `Vocabulary`.
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::{BpeTrainer, TrainingConfig};
//!
//! let trainer = BpeTrainer::new(TrainingConfig::default());
//! let (vocab, _outcome) = trainer.train("aabaab").unwrap();
//! assert!(vocab.merge_count() > 0);
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, PairCounter, PairStats, TrainOutcome, TrainingConfig};
