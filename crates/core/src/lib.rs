//! Bytepair-core - Core byte-level BPE codec
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-pair encoding: the rank-indexed vocabulary, greedy merge
//! re-application for encoding, recursive expansion for decoding, and
//! UTF-8-safe text reconstruction.
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{decoder, encoder, Vocabulary};
//!
//! let mut vocab = Vocabulary::new();
//! let aa = vocab.insert((97, 97)).unwrap();
//!
//! let tokens = encoder::encode("aaaa", &vocab);
//! assert_eq!(tokens, vec![aa, aa]);
//! assert_eq!(decoder::decode(&tokens, &vocab).unwrap(), "aaaa");
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod vocab;
pub use vocab::{Pair, TokenEntry, TokenId, Vocabulary, BYTE_TOKENS};

pub mod encoder;
pub use encoder::{encode, merge_pair};

pub mod decoder;
pub use decoder::{decode, expand_to_bytes};

pub mod utf8;
pub use utf8::decode_utf8;
