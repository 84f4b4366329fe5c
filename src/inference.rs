use log::info;
use ndarray::array;

use crate::{
    config::StoragePaths,
    error::{PipelineErr, Result},
    model::LogisticRegression,
};

/// One machine reading to classify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub run_time: f64,
}

/// The model's verdict for a single reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub downtime: bool,
    /// Highest class probability, rounded to two decimals.
    pub confidence: f64,
}

impl Prediction {
    pub fn downtime_label(&self) -> &'static str {
        if self.downtime {
            "Yes"
        } else {
            "No"
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Classifies `reading` with the stored model.
pub fn predict(storage: &StoragePaths, reading: Reading) -> Result<Prediction> {
    if !storage.model().exists() {
        return Err(PipelineErr::ModelMissing);
    }

    let model = LogisticRegression::load(storage.model())?;
    let x = array![[reading.temperature, reading.run_time]];

    let label = model.predict(x.view())?[0];
    let proba = model.predict_proba(x.view())?;
    let confidence = proba.row(0).iter().copied().fold(0.0, f64::max);

    let prediction = Prediction {
        downtime: label == 1,
        confidence: round2(confidence),
    };
    info!("{reading:?} -> {prediction:?}");

    Ok(prediction)
}
