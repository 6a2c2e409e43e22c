//! Expansion of token ID sequences back into text.
//!
//! Every merge token expands into the two IDs it replaced; expansion runs
//! to a fixed point (guaranteed to terminate because a merge token's
//! members are always strictly smaller IDs), leaving raw byte values that
//! are then reassembled into UTF-8 text.

use crate::error::{Result, TokenizerError};
use crate::utf8;
use crate::vocab::{TokenEntry, TokenId, Vocabulary, BYTE_TOKENS};

/// Decode a token ID sequence into text.
///
/// Fails with `UnknownToken` if an ID >= 256 has no vocabulary entry, and
/// with `MalformedUtf8` if the expanded bytes do not form valid UTF-8.
/// Expansion never silently skips an undefined token.
pub fn decode(tokens: &[TokenId], vocab: &Vocabulary) -> Result<String> {
    let bytes = expand_to_bytes(tokens, vocab)?;
    utf8::decode_utf8(&bytes)
}

/// Recursively expand a token ID sequence into raw byte values.
///
/// Uses an explicit stack instead of call recursion; left members are
/// pushed last so the byte order of the original text is preserved.
pub fn expand_to_bytes(tokens: &[TokenId], vocab: &Vocabulary) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(tokens.len());
    let mut stack: Vec<TokenId> = Vec::new();

    for &token in tokens {
        stack.push(token);
        while let Some(id) = stack.pop() {
            if id < BYTE_TOKENS {
                bytes.push(id as u8);
                continue;
            }
            match vocab.lookup(id) {
                Some(TokenEntry::Merge((left, right))) => {
                    stack.push(right);
                    stack.push(left);
                }
                _ => return Err(TokenizerError::UnknownToken(id)),
            }
        }
    }

    Ok(bytes)
}
