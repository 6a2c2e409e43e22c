//! BPE trainer implementation.
//!
//! Learns merge rules from text by iteratively replacing the most frequent
//! adjacent token pair with a fresh token ID. Each round recounts pairs
//! over the working sequence, picks the strictly-highest count (leftmost
//! first occurrence breaks ties), records the rule, and rewrites the
//! sequence with one non-overlapping left-to-right substitution pass.

use super::counter::PairCounter;
use bytepair_core::{merge_pair, Result, TokenId, Vocabulary};

/// Below this sequence length the parallel counting path costs more than
/// it saves.
const PARALLEL_THRESHOLD: usize = 16 * 1024;

/// Configuration for BPE training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Minimum pair count for a merge; the default of 2 stops training as
    /// soon as no pair repeats (a pair occurring once compresses nothing).
    pub min_frequency: u64,
    /// Optional cap on the number of merges to learn.
    pub max_merges: Option<usize>,
    /// Whether to count pairs in parallel for large sequences
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            max_merges: None,
            parallel: true,
        }
    }
}

/// How a training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainOutcome {
    /// No remaining pair met the frequency threshold
    Converged,
    /// The merge cap was hit while mergeable pairs remained
    MergeCapReached,
}

/// BPE trainer.
///
/// Consumes raw text and produces a populated `Vocabulary`. The vocabulary
/// is seeded with identity entries for every distinct byte observed, then
/// grows by one merge rule per round until convergence or the configured
/// cap.
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a trainer that learns at most `max_merges` rules.
    pub fn with_merge_cap(max_merges: usize) -> Self {
        Self::new(TrainingConfig {
            max_merges: Some(max_merges),
            ..Default::default()
        })
    }

    /// Train on the given text, producing the vocabulary and the outcome.
    ///
    /// Total over all valid UTF-8 input: empty or single-byte text simply
    /// converges immediately with no merge rules.
    pub fn train(&self, text: &str) -> Result<(Vocabulary, TrainOutcome)> {
        let mut vocab = Vocabulary::new();
        let mut tokens: Vec<TokenId> = text.bytes().map(TokenId::from).collect();

        for byte in text.bytes() {
            vocab.add_byte(byte);
        }

        loop {
            let counter = if self.config.parallel && tokens.len() >= PARALLEL_THRESHOLD {
                PairCounter::count_parallel(&tokens)
            } else {
                PairCounter::count(&tokens)
            };

            let Some((pair, count)) = counter.best() else {
                return Ok((vocab, TrainOutcome::Converged));
            };
            if count < self.config.min_frequency {
                return Ok((vocab, TrainOutcome::Converged));
            }
            if let Some(cap) = self.config.max_merges {
                if vocab.merge_count() >= cap {
                    return Ok((vocab, TrainOutcome::MergeCapReached));
                }
            }

            let new_id = vocab.insert(pair)?;
            merge_pair(&mut tokens, pair, new_id);
        }
    }
}

impl Default for BpeTrainer {
    fn default() -> Self {
        Self::new(TrainingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepair_core::TokenEntry;

    fn train(text: &str) -> (Vocabulary, TrainOutcome) {
        BpeTrainer::default().train(text).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_vocabulary() {
        let (vocab, outcome) = train("");
        assert!(vocab.is_empty());
        assert_eq!(outcome, TrainOutcome::Converged);
    }

    #[test]
    fn test_single_char_yields_identity_only() {
        let (vocab, outcome) = train("x");
        assert_eq!(vocab.merge_count(), 0);
        assert_eq!(vocab.byte_count(), 1);
        assert!(vocab.is_byte_observed(b'x'));
        assert_eq!(outcome, TrainOutcome::Converged);
    }

    #[test]
    fn test_no_repeated_pair_yields_no_merges() {
        let (vocab, _) = train("abcdef");
        assert_eq!(vocab.merge_count(), 0);
        assert_eq!(vocab.byte_count(), 6);
    }

    #[test]
    fn test_aaaa_learns_single_merge() {
        // Pairs of "aaaa": (a,a) x3 -> merge to 256, leaving [256, 256]
        // whose only pair occurs once, so training stops there.
        let (vocab, _) = train("aaaa");
        assert_eq!(vocab.merge_count(), 1);
        assert_eq!(vocab.lookup(256), Some(TokenEntry::Merge((97, 97))));
    }

    #[test]
    fn test_aabaab_merge_order() {
        // (a,a) and (a,b) both occur twice; (a,a) occurs first, wins the
        // tie, and becomes 256. The rewritten sequence [256, b, 256, b]
        // then merges (256, b) into 257.
        let (vocab, _) = train("aabaab");
        assert_eq!(vocab.lookup(256), Some(TokenEntry::Merge((97, 97))));
        assert_eq!(vocab.lookup(257), Some(TokenEntry::Merge((256, 98))));
        assert_eq!(vocab.merge_count(), 2);
    }

    #[test]
    fn test_tie_break_leftmost_first_occurrence() {
        // "ababcdcd": (a,b) and (c,d) both occur twice; (a,b) is leftmost.
        let (vocab, _) = train("ababcdcd");
        assert_eq!(vocab.lookup(256), Some(TokenEntry::Merge((97, 98))));
    }

    #[test]
    fn test_monotonic_id_assignment() {
        let (vocab, _) = train("the theater thermal theme");
        for (rank, &(left, right)) in vocab.merges().iter().enumerate() {
            let id = 256 + rank as TokenId;
            assert!(left < id);
            assert!(right < id);
        }
    }

    #[test]
    fn test_merge_cap_reached() {
        let trainer = BpeTrainer::with_merge_cap(1);
        let (vocab, outcome) = trainer.train("aabaab").unwrap();

        assert_eq!(vocab.merge_count(), 1);
        assert_eq!(outcome, TrainOutcome::MergeCapReached);
    }

    #[test]
    fn test_merge_cap_above_convergence_is_converged() {
        let trainer = BpeTrainer::with_merge_cap(100);
        let (vocab, outcome) = trainer.train("aabaab").unwrap();

        assert_eq!(vocab.merge_count(), 2);
        assert_eq!(outcome, TrainOutcome::Converged);
    }

    #[test]
    fn test_multibyte_training_counts_bytes() {
        // é is 0xC3 0xA9; "éé" repeats that byte pair.
        let (vocab, _) = train("éé");
        assert_eq!(vocab.byte_count(), 2);
        assert_eq!(vocab.lookup(256), Some(TokenEntry::Merge((0xC3, 0xA9))));
    }
}
