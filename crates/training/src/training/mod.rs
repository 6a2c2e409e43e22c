//! Training loop and pair counting.

pub mod counter;
pub mod trainer;

pub use counter::{PairCounter, PairStats};
pub use trainer::{BpeTrainer, TrainOutcome, TrainingConfig};
