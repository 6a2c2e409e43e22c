//! Save functionality for trained tokenizers.

use super::format::{MergeRecord, SerializedConfig, SerializedTokenizer};
use crate::tokenizer::TokenizerConfig;
use bytepair_core::{Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    /// Vocabulary reference
    vocab: &'a Vocabulary,
    /// Configuration reference
    config: &'a TokenizerConfig,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(vocab: &'a Vocabulary, config: &'a TokenizerConfig) -> Self {
        Self { vocab, config }
    }

    /// Save the tokenizer to a directory as `tokenizer.json`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            TokenizerError::Save(format!(
                "failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let file_path = path.join("tokenizer.json");
        let file = File::create(&file_path).map_err(|e| {
            TokenizerError::Save(format!(
                "failed to create file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.serialize())
            .map_err(|e| TokenizerError::Save(format!("failed to serialize tokenizer: {}", e)))?;

        Ok(())
    }

    /// Serialize the tokenizer to the persisted structure.
    pub(crate) fn serialize(&self) -> SerializedTokenizer {
        let merges = self
            .vocab
            .merges()
            .iter()
            .map(|&(left, right)| MergeRecord { left, right })
            .collect();

        SerializedTokenizer {
            version: env!("CARGO_PKG_VERSION").to_string(),
            bytes: self.vocab.observed_bytes().collect(),
            merges,
            config: SerializedConfig {
                min_frequency: self.config.min_frequency,
                max_merges: self.config.max_merges,
            },
        }
    }
}
