mod logistic;

pub use logistic::{FitConfig, LogisticRegression};
