//! Format definitions for tokenizer serialization.
//!
//! The persisted model is a single JSON document: the observed byte values
//! and the merge rules as an ordered list indexed by token ID (entry `i`
//! defines ID `256 + i`, so rank is the list position and needs no
//! separate field).

use serde::{Deserialize, Serialize};

/// A single merge rule: the pair of token IDs it replaces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MergeRecord {
    /// Left member of the pair
    pub left: u32,
    /// Right member of the pair
    pub right: u32,
}

/// Training configuration persisted alongside the vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedConfig {
    pub min_frequency: u64,
    pub max_merges: Option<usize>,
}

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Format version
    pub version: String,
    /// Byte values observed during training, ascending
    pub bytes: Vec<u8>,
    /// Merge rules ordered by token ID; entry `i` defines ID `256 + i`
    pub merges: Vec<MergeRecord>,
    /// Configuration used for training
    pub config: SerializedConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let data = SerializedTokenizer {
            version: "0.1.0".to_string(),
            bytes: vec![97, 98],
            merges: vec![
                MergeRecord { left: 97, right: 97 },
                MergeRecord { left: 256, right: 98 },
            ],
            config: SerializedConfig {
                min_frequency: 2,
                max_merges: None,
            },
        };

        let json = serde_json::to_string(&data).unwrap();
        let deserialized: SerializedTokenizer = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.version, data.version);
        assert_eq!(deserialized.bytes, data.bytes);
        assert_eq!(deserialized.merges.len(), 2);
        assert_eq!(deserialized.merges[1].left, 256);
    }
}
