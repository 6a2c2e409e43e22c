//! Vocabulary storage and lookup.
//!
//! Token IDs below 256 are reserved for literal byte values (identity
//! mapping). IDs from 256 upward name merge rules, assigned in strictly
//! increasing creation order; that order is the merge rank, stored
//! explicitly as the position in a rank-indexed array rather than derived
//! from any container's iteration order.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;

/// Integer identifier for a token: a literal byte (< 256) or a merge rule.
pub type TokenId = u32;

/// An ordered pair of token IDs that a merge rule replaces.
pub type Pair = (TokenId, TokenId);

/// First token ID available for merge rules; IDs below this are bytes.
pub const BYTE_TOKENS: TokenId = 256;

/// Definition of a token ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEntry {
    /// A literal byte value (ID < 256)
    Byte(u8),
    /// A merge rule: the pair of token IDs it replaces
    Merge(Pair),
}

/// Vocabulary mapping token IDs to their definitions.
///
/// Grows monotonically during training (one merge rule per step) and is
/// immutable afterwards; encoding and decoding only ever read it, so a
/// trained vocabulary can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Which byte values were observed in the training text (identity seeds)
    seen: [bool; 256],
    /// Merge rules indexed by rank; rank `r` corresponds to ID `256 + r`
    merges: Vec<Pair>,
    /// Reverse index: pair -> the merge token ID it produces
    pair_index: AHashMap<Pair, TokenId>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self {
            seen: [false; 256],
            merges: Vec::new(),
            pair_index: AHashMap::new(),
        }
    }

    /// Create a new vocabulary with capacity for the expected merge count.
    pub fn with_capacity(merges: usize) -> Self {
        Self {
            seen: [false; 256],
            merges: Vec::with_capacity(merges),
            pair_index: AHashMap::with_capacity(merges),
        }
    }

    /// Seed an identity entry for an observed byte value.
    pub fn add_byte(&mut self, byte: u8) {
        self.seen[byte as usize] = true;
    }

    /// Next token ID that `insert` would assign. Starts at 256.
    #[inline]
    pub fn next_free_id(&self) -> TokenId {
        BYTE_TOKENS + self.merges.len() as TokenId
    }

    /// Bind `pair` to a fresh merge token ID and return it.
    ///
    /// Both members must already be defined (a byte ID or an existing merge
    /// ID), which keeps every merge token strictly greater than its members
    /// and guarantees expansion terminates. Returns the existing ID if the
    /// pair is already bound.
    pub fn insert(&mut self, pair: Pair) -> Result<TokenId> {
        if let Some(&id) = self.pair_index.get(&pair) {
            return Ok(id);
        }

        let id = self.next_free_id();
        if pair.0 >= id || pair.1 >= id {
            return Err(TokenizerError::InvalidMerge(format!(
                "pair ({}, {}) references an ID not yet defined (next free ID is {})",
                pair.0, pair.1, id
            )));
        }

        self.merges.push(pair);
        self.pair_index.insert(pair, id);
        Ok(id)
    }

    /// Look up the definition of a token ID.
    ///
    /// IDs below 256 always resolve to their literal byte value, whether or
    /// not that byte was observed during training; this is the raw-byte
    /// fallback that makes encoding total.
    #[inline]
    pub fn lookup(&self, id: TokenId) -> Option<TokenEntry> {
        if id < BYTE_TOKENS {
            Some(TokenEntry::Byte(id as u8))
        } else {
            self.merges
                .get((id - BYTE_TOKENS) as usize)
                .map(|&pair| TokenEntry::Merge(pair))
        }
    }

    /// Check whether a token ID has a definition.
    #[inline]
    pub fn contains(&self, id: TokenId) -> bool {
        id < BYTE_TOKENS || ((id - BYTE_TOKENS) as usize) < self.merges.len()
    }

    /// Get the merge token ID for a pair, if one was learned.
    #[inline]
    pub fn merge_id(&self, pair: Pair) -> Option<TokenId> {
        self.pair_index.get(&pair).copied()
    }

    /// Rank of a merge token (0 = learned first), if `id` names one.
    #[inline]
    pub fn rank_of(&self, id: TokenId) -> Option<u32> {
        let rank = id.checked_sub(BYTE_TOKENS)?;
        ((rank as usize) < self.merges.len()).then_some(rank)
    }

    /// Merge rules in rank order.
    #[inline]
    pub fn merges(&self) -> &[Pair] {
        &self.merges
    }

    /// Number of learned merge rules.
    #[inline]
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }

    /// Number of seeded byte identity entries.
    pub fn byte_count(&self) -> usize {
        self.seen.iter().filter(|&&s| s).count()
    }

    /// Whether an identity entry was seeded for this byte value.
    #[inline]
    pub fn is_byte_observed(&self, byte: u8) -> bool {
        self.seen[byte as usize]
    }

    /// Observed byte values in ascending order.
    pub fn observed_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        (0u16..256).filter(|&b| self.seen[b as usize]).map(|b| b as u8)
    }

    /// Total number of entries (identity seeds plus merge rules).
    pub fn len(&self) -> usize {
        self.byte_count() + self.merges.len()
    }

    /// Check if the vocabulary has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty() && !self.seen.iter().any(|&s| s)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
        assert_eq!(vocab.next_free_id(), 256);
        assert_eq!(vocab.merge_id((97, 97)), None);
    }

    #[test]
    fn test_byte_identity() {
        let vocab = Vocabulary::new();
        // Byte IDs resolve even without a seeded entry.
        assert_eq!(vocab.lookup(97), Some(TokenEntry::Byte(97)));
        assert!(vocab.contains(255));
        assert!(!vocab.contains(256));
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut vocab = Vocabulary::new();
        vocab.add_byte(97);
        vocab.add_byte(98);

        let id1 = vocab.insert((97, 97)).unwrap();
        let id2 = vocab.insert((id1, 98)).unwrap();

        assert_eq!(id1, 256);
        assert_eq!(id2, 257);
        assert_eq!(vocab.lookup(256), Some(TokenEntry::Merge((97, 97))));
        assert_eq!(vocab.lookup(257), Some(TokenEntry::Merge((256, 98))));
        assert_eq!(vocab.merge_id((97, 97)), Some(256));
        assert_eq!(vocab.rank_of(256), Some(0));
        assert_eq!(vocab.rank_of(257), Some(1));
        assert_eq!(vocab.rank_of(97), None);
    }

    #[test]
    fn test_insert_duplicate_pair_returns_existing() {
        let mut vocab = Vocabulary::new();
        let id1 = vocab.insert((97, 98)).unwrap();
        let id2 = vocab.insert((97, 98)).unwrap();

        assert_eq!(id1, id2);
        assert_eq!(vocab.merge_count(), 1);
    }

    #[test]
    fn test_insert_rejects_undefined_members() {
        let mut vocab = Vocabulary::new();
        let err = vocab.insert((97, 300)).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
        assert_eq!(vocab.merge_count(), 0);
    }

    #[test]
    fn test_merge_ids_exceed_members() {
        let mut vocab = Vocabulary::new();
        let mut prev = vocab.insert((104, 105)).unwrap();
        for _ in 0..10 {
            let id = vocab.insert((prev, 33)).unwrap();
            assert!(id > prev);
            assert!(id > 33);
            prev = id;
        }
    }

    #[test]
    fn test_observed_bytes_sorted() {
        let mut vocab = Vocabulary::new();
        vocab.add_byte(200);
        vocab.add_byte(10);
        vocab.add_byte(10);
        vocab.add_byte(97);

        let bytes: Vec<u8> = vocab.observed_bytes().collect();
        assert_eq!(bytes, vec![10, 97, 200]);
        assert_eq!(vocab.byte_count(), 3);
        assert!(vocab.is_byte_observed(97));
        assert!(!vocab.is_byte_observed(98));
    }
}
