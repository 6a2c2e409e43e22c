//! Main tokenizer implementation.
//!
//! `Tokenizer` owns exactly one `Vocabulary`: `train` constructs it,
//! `encode`/`decode` read it. After training the vocabulary is never
//! mutated, so encode and decode calls may run concurrently against the
//! same instance (`encode_batch` relies on this).

use bytepair_core::{decoder, encoder, Result, TokenId, Vocabulary};
use bytepair_training::{BpeTrainer, TrainOutcome, TrainingConfig};
use std::path::Path;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Minimum pair frequency for merges during training
    pub min_frequency: u64,
    /// Optional cap on the number of merges to learn
    pub max_merges: Option<usize>,
    /// Whether to count pairs in parallel for large inputs
    pub parallel: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            max_merges: None,
            parallel: true,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum pair frequency for merges.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Cap the number of merges learned during training.
    pub fn max_merges(mut self, cap: usize) -> Self {
        self.config.max_merges = Some(cap);
        self
    }

    /// Enable or disable parallel pair counting.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Tokenizer {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
pub struct Tokenizer {
    /// Vocabulary (empty until trained or loaded)
    vocab: Vocabulary,
    /// Configuration
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new untrained tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            vocab: Vocabulary::new(),
            config,
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Create a tokenizer around an existing vocabulary.
    pub fn from_vocabulary(vocab: Vocabulary) -> Self {
        Self {
            vocab,
            config: TokenizerConfig::default(),
        }
    }

    /// Train on text, replacing any existing vocabulary.
    pub fn train(&mut self, text: &str) -> Result<TrainOutcome> {
        let trainer = BpeTrainer::new(TrainingConfig {
            min_frequency: self.config.min_frequency,
            max_merges: self.config.max_merges,
            parallel: self.config.parallel,
        });

        let (vocab, outcome) = trainer.train(text)?;
        self.vocab = vocab;
        Ok(outcome)
    }

    /// Encode text to token IDs. Never fails: bytes without an applicable
    /// merge rule pass through as raw byte IDs.
    pub fn encode(&self, text: &str) -> Encoding {
        Encoding {
            ids: encoder::encode(text, &self.vocab),
            byte_len: text.len(),
        }
    }

    /// Encode a batch of texts in parallel.
    pub fn encode_batch(&self, texts: &[String]) -> Vec<Encoding> {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Decode token IDs back to text.
    pub fn decode(&self, ids: &[TokenId]) -> Result<String> {
        decoder::decode(ids, &self.vocab)
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Get the vocabulary size (identity entries plus merge rules).
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Save the tokenizer to a directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        use crate::io::save::TokenizerSaver;

        TokenizerSaver::new(&self.vocab, &self.config).save(path)
    }

    /// Load a tokenizer from a directory.
    pub fn load(path: &Path) -> Result<Self> {
        use crate::io::load::TokenizerLoader;

        let (vocab, config) = TokenizerLoader::load(path)?;
        Ok(Self { vocab, config })
    }
}

/// Result of encoding text.
#[derive(Debug, Clone)]
pub struct Encoding {
    /// Token IDs
    pub ids: Vec<TokenId>,
    /// Length in bytes of the source text
    pub byte_len: usize,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Fraction of bytes saved relative to the raw UTF-8 encoding
    /// (0.0 for empty or incompressible input).
    pub fn compression_ratio(&self) -> f64 {
        if self.byte_len == 0 {
            0.0
        } else {
            1.0 - self.ids.len() as f64 / self.byte_len as f64
        }
    }
}
