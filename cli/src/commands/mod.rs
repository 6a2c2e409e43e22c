//! CLI subcommand implementations.

pub mod decode;
pub mod encode;
pub mod stats;
pub mod train;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use stats::StatsCommand;
pub use train::TrainCommand;
