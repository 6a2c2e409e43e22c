//! UTF-8 reassembly from raw byte values.
//!
//! Decoding a token sequence yields raw bytes that may split multi-byte
//! code points; this module regroups them. It is a small finite-state
//! scanner (expect lead byte, then expect the Nth continuation byte) so
//! malformed input can be reported with a precise byte offset instead of
//! being patched over.

use crate::error::{Result, TokenizerError};

/// Minimum code point for each sequence length; anything below is overlong.
const MIN_CODE_POINT: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Decode a byte slice into a `String`, validating UTF-8 by hand.
///
/// Lead bytes are classified by their leading bits (`0xxxxxxx` starts a
/// 1-byte sequence, `110xxxxx` 2 bytes, `1110xxxx` 3, `11110xxx` 4), then
/// that many continuation bytes are consumed as one code point. Truncated
/// sequences, stray continuation bytes, overlong encodings and
/// surrogate/out-of-range code points all fail with `MalformedUtf8`.
pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(bytes.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let lead = bytes[pos];

        // ASCII fast path
        if lead < 0x80 {
            out.push(lead as char);
            pos += 1;
            continue;
        }

        let (len, mut acc) = match lead {
            0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
            0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
            0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
            0x80..=0xBF => {
                return Err(malformed(pos, "continuation byte without a lead byte"));
            }
            _ => return Err(malformed(pos, "invalid lead byte")),
        };

        if pos + len > bytes.len() {
            return Err(malformed(pos, "truncated multi-byte sequence"));
        }

        for offset in 1..len {
            let b = bytes[pos + offset];
            if b & 0xC0 != 0x80 {
                return Err(malformed(pos + offset, "expected continuation byte"));
            }
            acc = (acc << 6) | u32::from(b & 0x3F);
        }

        if acc < MIN_CODE_POINT[len] {
            return Err(malformed(pos, "overlong encoding"));
        }

        let ch = char::from_u32(acc)
            .ok_or_else(|| malformed(pos, "surrogate or out-of-range code point"))?;
        out.push(ch);
        pos += len;
    }

    Ok(out)
}

fn malformed(offset: usize, reason: &str) -> TokenizerError {
    TokenizerError::MalformedUtf8 {
        offset,
        reason: reason.to_string(),
    }
}
