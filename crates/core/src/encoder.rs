//! Greedy re-application of learned merges.
//!
//! Encoding starts from one token per UTF-8 byte and repeatedly applies the
//! earliest-learned merge rule that still matches somewhere, replaying the
//! rules in rank order so later merges never pre-empt the pairs an earlier
//! merge would have claimed. Rank order is consulted directly through token
//! IDs (lower ID = learned earlier), never through map iteration order.

use crate::vocab::{Pair, TokenId, Vocabulary};

/// Encode text into a token ID sequence using a trained vocabulary.
///
/// Total for any text and any vocabulary: bytes with no applicable merge
/// stay as raw byte IDs (0-255). Empty text yields an empty sequence.
pub fn encode(text: &str, vocab: &Vocabulary) -> Vec<TokenId> {
    let mut tokens: Vec<TokenId> = text.bytes().map(TokenId::from).collect();

    loop {
        // Lowest merge ID applicable anywhere in the current sequence.
        let best = tokens
            .windows(2)
            .filter_map(|w| {
                let pair = (w[0], w[1]);
                vocab.merge_id(pair).map(|id| (id, pair))
            })
            .min_by_key(|&(id, _)| id);

        match best {
            Some((id, pair)) => merge_pair(&mut tokens, pair, id),
            None => break,
        }
    }

    tokens
}

/// Replace every non-overlapping occurrence of `pair` with `new_id`,
/// scanning left to right. Shared with the trainer, which rewrites the
/// working sequence the same way after each learned merge.
pub fn merge_pair(tokens: &mut Vec<TokenId>, pair: Pair, new_id: TokenId) {
    let mut write = 0;
    let mut read = 0;

    while read < tokens.len() {
        if read + 1 < tokens.len() && tokens[read] == pair.0 && tokens[read + 1] == pair.1 {
            tokens[write] = new_id;
            read += 2;
        } else {
            tokens[write] = tokens[read];
            read += 1;
        }
        write += 1;
    }

    tokens.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_pair_non_overlapping() {
        // "aaa": the first two tokens merge, the third survives.
        let mut tokens = vec![97, 97, 97];
        merge_pair(&mut tokens, (97, 97), 256);
        assert_eq!(tokens, vec![256, 97]);

        let mut tokens = vec![97, 97, 97, 97];
        merge_pair(&mut tokens, (97, 97), 256);
        assert_eq!(tokens, vec![256, 256]);
    }

    #[test]
    fn test_merge_pair_no_match() {
        let mut tokens = vec![97, 98, 99];
        merge_pair(&mut tokens, (98, 97), 256);
        assert_eq!(tokens, vec![97, 98, 99]);
    }

    #[test]
    fn test_encode_empty() {
        let vocab = Vocabulary::new();
        assert!(encode("", &vocab).is_empty());
    }

    #[test]
    fn test_encode_without_merges_is_raw_bytes() {
        let vocab = Vocabulary::new();
        assert_eq!(encode("abc", &vocab), vec![97, 98, 99]);
    }

    #[test]
    fn test_encode_applies_merges_in_rank_order() {
        let mut vocab = Vocabulary::new();
        let aa = vocab.insert((97, 97)).unwrap(); // rank 0
        let aab = vocab.insert((aa, 98)).unwrap(); // rank 1

        // Rank 0 must claim both 'aa' runs before rank 1 runs.
        assert_eq!(encode("aabaab", &vocab), vec![aab, aab]);
    }

    #[test]
    fn test_encode_unseen_bytes_pass_through() {
        let mut vocab = Vocabulary::new();
        let aa = vocab.insert((97, 97)).unwrap();

        // 'z' never appeared during training and stays a raw byte ID.
        assert_eq!(encode("aaz", &vocab), vec![aa, 122]);
    }

    #[test]
    fn test_encode_multibyte_text_without_rules() {
        let vocab = Vocabulary::new();
        // é is two bytes; with no rules each byte stays its own token.
        assert_eq!(encode("é", &vocab), vec![0xC3, 0xA9]);
    }
}
