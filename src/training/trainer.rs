use log::info;
use ndarray::Array2;

use super::{metrics, split::train_test_split};
use crate::{
    config::StoragePaths,
    dataset::{Table, FEATURE_COLUMNS, LABEL_COLUMN},
    error::{PipelineErr, Result},
    model::{FitConfig, LogisticRegression},
};

/// Share of rows held out for evaluation.
pub const TEST_RATIO: f64 = 0.2;

/// Seed of the train/test shuffle, fixed so that reruns on the same data agree.
pub const SPLIT_SEED: u64 = 42;

/// Outcome of a successful training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub accuracy: f64,
    pub f1_score: f64,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Feature matrix and labels pulled out of a dataset table.
struct Samples {
    x: Array2<f64>,
    y: Vec<u8>,
}

impl Samples {
    fn from_table(table: &Table) -> Result<Self> {
        let cols = FEATURE_COLUMNS
            .iter()
            .map(|name| table.numeric_column(name))
            .collect::<Result<Vec<_>>>()?;

        let y = table
            .numeric_column(LABEL_COLUMN)?
            .into_iter()
            .map(|value| {
                if value == 0.0 {
                    Ok(0)
                } else if value == 1.0 {
                    Ok(1)
                } else {
                    Err(PipelineErr::NonBinaryLabel { value })
                }
            })
            .collect::<Result<Vec<u8>>>()?;

        let x = Array2::from_shape_fn((table.len(), cols.len()), |(i, j)| cols[j][i]);
        Ok(Self { x, y })
    }

    fn select(&self, rows: &[usize]) -> (Array2<f64>, Vec<u8>) {
        let x = Array2::from_shape_fn((rows.len(), self.x.ncols()), |(i, j)| {
            self.x[[rows[i], j]]
        });
        let y = rows.iter().map(|&r| self.y[r]).collect();
        (x, y)
    }
}

/// Fits a fresh model on the stored dataset and replaces the stored model with it.
///
/// The model file is only written after fitting and evaluation succeed, so a
/// failed run leaves any previous model in place.
///
/// # Returns
/// Accuracy and F1 on the held-out rows.
pub fn train(storage: &StoragePaths) -> Result<TrainReport> {
    if !storage.dataset().exists() {
        return Err(PipelineErr::DatasetMissing);
    }

    let table = Table::read(storage.dataset())?;
    let samples = Samples::from_table(&table)?;

    let split = train_test_split(table.len(), TEST_RATIO, SPLIT_SEED)?;
    let (x_train, y_train) = samples.select(&split.train);
    let (x_test, y_test) = samples.select(&split.test);
    info!(
        "training on {} rows, evaluating on {}",
        y_train.len(),
        y_test.len()
    );

    let model = LogisticRegression::fit(x_train.view(), &y_train, FitConfig::default())?;
    let y_pred = model.predict(x_test.view())?.to_vec();

    let report = TrainReport {
        accuracy: metrics::accuracy(&y_test, &y_pred)?,
        f1_score: metrics::f1_score(&y_test, &y_pred)?,
        train_rows: y_train.len(),
        test_rows: y_test.len(),
    };

    model.save(storage.model())?;
    info!(
        "model written to {} (accuracy {:.3}, f1 {:.3})",
        storage.model().display(),
        report.accuracy,
        report.f1_score
    );

    Ok(report)
}
