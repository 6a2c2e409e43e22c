//! Load functionality for pre-trained tokenizers.

use super::format::SerializedTokenizer;
use crate::tokenizer::TokenizerConfig;
use bytepair_core::{Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a tokenizer from a directory containing `tokenizer.json`.
    pub fn load(path: &Path) -> Result<(Vocabulary, TokenizerConfig)> {
        let file_path = path.join("tokenizer.json");
        let file = File::open(&file_path).map_err(|e| {
            TokenizerError::Load(format!(
                "failed to open file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("failed to deserialize tokenizer: {}", e)))?;

        Self::deserialize(serialized)
    }

    /// Rebuild a vocabulary from its persisted form.
    ///
    /// Re-validates the monotonic-ID invariant: each merge entry may only
    /// reference byte IDs or merges that appear earlier in the list, and no
    /// pair may appear twice (a duplicate would silently shift every later
    /// rank).
    pub(crate) fn deserialize(
        data: SerializedTokenizer,
    ) -> Result<(Vocabulary, TokenizerConfig)> {
        let mut vocab = Vocabulary::with_capacity(data.merges.len());

        for byte in data.bytes {
            vocab.add_byte(byte);
        }

        for (index, record) in data.merges.iter().enumerate() {
            let expected = vocab.next_free_id();
            let id = vocab.insert((record.left, record.right))?;
            if id != expected {
                return Err(TokenizerError::Load(format!(
                    "duplicate merge pair ({}, {}) at entry {}",
                    record.left, record.right, index
                )));
            }
        }

        let config = TokenizerConfig {
            min_frequency: data.config.min_frequency,
            max_merges: data.config.max_merges,
            parallel: true,
        };

        Ok((vocab, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::format::{MergeRecord, SerializedConfig};
    use crate::tokenizer::Tokenizer;

    fn serialized(merges: Vec<MergeRecord>) -> SerializedTokenizer {
        SerializedTokenizer {
            version: "0.1.0".to_string(),
            bytes: vec![97, 98],
            merges,
            config: SerializedConfig {
                min_frequency: 2,
                max_merges: None,
            },
        }
    }

    #[test]
    fn test_deserialize_rebuilds_pair_index() {
        let data = serialized(vec![
            MergeRecord { left: 97, right: 97 },
            MergeRecord { left: 256, right: 98 },
        ]);

        let (vocab, _) = TokenizerLoader::deserialize(data).unwrap();
        assert_eq!(vocab.merge_id((97, 97)), Some(256));
        assert_eq!(vocab.merge_id((256, 98)), Some(257));
        assert_eq!(vocab.byte_count(), 2);
    }

    #[test]
    fn test_deserialize_rejects_forward_reference() {
        // Entry 0 would define ID 256 but references ID 300.
        let data = serialized(vec![MergeRecord { left: 300, right: 97 }]);
        let err = TokenizerLoader::deserialize(data).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_pair() {
        let data = serialized(vec![
            MergeRecord { left: 97, right: 98 },
            MergeRecord { left: 97, right: 98 },
        ]);
        let err = TokenizerLoader::deserialize(data).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join("bytepair_test_load");
        std::fs::create_dir_all(&temp_dir).unwrap();

        let mut tokenizer = Tokenizer::builder().build();
        tokenizer.train("the theater thermal theme").unwrap();
        tokenizer.save(&temp_dir).unwrap();

        let loaded = Tokenizer::load(&temp_dir).unwrap();
        assert_eq!(loaded.vocab_size(), tokenizer.vocab_size());
        assert_eq!(loaded.vocab().merges(), tokenizer.vocab().merges());

        // The loaded model must encode and decode identically.
        let text = "the theater thermal theme";
        let original = tokenizer.encode(text);
        let reloaded = loaded.encode(text);
        assert_eq!(original.ids, reloaded.ids);
        assert_eq!(loaded.decode(&reloaded.ids).unwrap(), text);

        std::fs::remove_dir_all(temp_dir).ok();
    }
}
