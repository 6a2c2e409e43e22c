//! Bytepair - High-level byte-level BPE tokenizer API
//!
//! This crate ties the core codec and the trainer together behind a single
//! `Tokenizer` that owns one `Vocabulary`, plus save/load support for the
//! persisted model format.
//!
//! # Example
//!
//! ```rust
//! use bytepair::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().build();
//! tokenizer.train("aabaab").unwrap();
//!
//! let encoding = tokenizer.encode("aabaab");
//! let text = tokenizer.decode(&encoding.ids).unwrap();
//! assert_eq!(text, "aabaab");
//! ```

// Re-export core types
pub use bytepair_core::{Pair, Result, TokenEntry, TokenId, TokenizerError, Vocabulary};
pub use bytepair_training::TrainOutcome;

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
