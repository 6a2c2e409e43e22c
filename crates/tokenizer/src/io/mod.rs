//! Saving and loading trained tokenizers.

pub mod format;
pub mod load;
pub mod save;

pub use format::{MergeRecord, SerializedConfig, SerializedTokenizer};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
