//! Pair counting for BPE training.
//!
//! One linear pass over the working token sequence yields, for every
//! adjacent pair, its occurrence count and the index of its first
//! occurrence. The first-occurrence index is what makes selection
//! deterministic: among equal-count pairs the leftmost first occurrence
//! wins, and since a sequence position holds exactly one pair, no two
//! pairs share a first-occurrence index.

use ahash::AHashMap;
use bytepair_core::{Pair, TokenId};
use std::cmp::Reverse;

/// Occurrence statistics for one adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStats {
    /// Number of occurrences in the sequence
    pub count: u64,
    /// Index of the leftmost occurrence
    pub first_at: usize,
}

/// Counter for adjacent-pair frequencies in a token sequence.
pub struct PairCounter {
    counts: AHashMap<Pair, PairStats>,
}

impl PairCounter {
    /// Count all adjacent pairs in a single sequential pass.
    pub fn count(tokens: &[TokenId]) -> Self {
        let mut counts: AHashMap<Pair, PairStats> = AHashMap::new();

        for (i, window) in tokens.windows(2).enumerate() {
            let pair = (window[0], window[1]);
            counts
                .entry(pair)
                .and_modify(|stats| stats.count += 1)
                .or_insert(PairStats { count: 1, first_at: i });
        }

        Self { counts }
    }

    /// Count all adjacent pairs in parallel.
    ///
    /// Produces exactly the same statistics as `count`: per-chunk maps are
    /// reduced by summing counts and keeping the minimum first-occurrence
    /// index, both order-independent operations.
    pub fn count_parallel(tokens: &[TokenId]) -> Self {
        use rayon::prelude::*;

        let counts = (0..tokens.len().saturating_sub(1))
            .into_par_iter()
            .fold(
                AHashMap::<Pair, PairStats>::new,
                |mut acc, i| {
                    let pair = (tokens[i], tokens[i + 1]);
                    acc.entry(pair)
                        .and_modify(|stats| {
                            stats.count += 1;
                            stats.first_at = stats.first_at.min(i);
                        })
                        .or_insert(PairStats { count: 1, first_at: i });
                    acc
                },
            )
            .reduce(AHashMap::new, |mut acc, part| {
                for (pair, stats) in part {
                    acc.entry(pair)
                        .and_modify(|merged| {
                            merged.count += stats.count;
                            merged.first_at = merged.first_at.min(stats.first_at);
                        })
                        .or_insert(stats);
                }
                acc
            });

        Self { counts }
    }

    /// The pair with the strictly highest count, ties broken by leftmost
    /// first occurrence. Returns `None` when the sequence had no pairs.
    pub fn best(&self) -> Option<(Pair, u64)> {
        self.counts
            .iter()
            .max_by_key(|(_, stats)| (stats.count, Reverse(stats.first_at)))
            .map(|(&pair, stats)| (pair, stats.count))
    }

    /// Statistics for a specific pair.
    pub fn get(&self, pair: Pair) -> Option<PairStats> {
        self.counts.get(&pair).copied()
    }

    /// Number of distinct pairs observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no pairs were observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
