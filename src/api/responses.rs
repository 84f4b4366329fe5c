use serde::{Deserialize, Serialize};

use crate::{dataset::UploadSummary, inference::Prediction, training::TrainReport};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub columns: Vec<String>,
    pub rows: usize,
}

impl From<UploadSummary> for UploadResponse {
    fn from(summary: UploadSummary) -> Self {
        Self {
            message: "File uploaded successfully.",
            columns: summary.columns,
            rows: summary.rows,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub message: &'static str,
    pub accuracy: f64,
    pub f1_score: f64,
}

impl From<TrainReport> for TrainResponse {
    fn from(report: TrainReport) -> Self {
        Self {
            message: "Model trained successfully.",
            accuracy: report.accuracy,
            f1_score: report.f1_score,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Run_Time")]
    pub run_time: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(rename = "Downtime")]
    pub downtime: &'static str,
    #[serde(rename = "Confidence")]
    pub confidence: f64,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            downtime: prediction.downtime_label(),
            confidence: prediction.confidence,
        }
    }
}
