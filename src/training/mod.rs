pub mod metrics;
mod split;
mod trainer;

pub use split::{train_test_split, Split};
pub use trainer::{train, TrainReport, SPLIT_SEED, TEST_RATIO};
