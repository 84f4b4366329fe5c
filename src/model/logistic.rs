use std::{fs, path::Path};

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::{
    artifact,
    error::{PipelineErr, Result},
};

/// Hyperparameters for `LogisticRegression::fit`.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// Inverse L2 regularization strength; the penalty is `||w||^2 / (2 * c * n)`.
    pub c: f64,
    pub learning_rate: f64,
    pub max_iter: usize,
    /// Stop once every gradient component is below this in absolute value.
    pub tol: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            learning_rate: 0.5,
            max_iter: 5000,
            tol: 1e-6,
        }
    }
}

/// Binary logistic regression over standardized features.
///
/// The per-feature mean and scale seen at fit time are stored with the weights, so
/// callers always pass raw feature values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    mean: Vec<f64>,
    scale: Vec<f64>,
    weights: Vec<f64>,
    intercept: f64,
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl LogisticRegression {
    /// Fits the model on `x` (one row per sample) and 0/1 labels `y`.
    pub fn fit(x: ArrayView2<f64>, y: &[u8], cfg: FitConfig) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(PipelineErr::SizeMismatch {
                a: "x",
                b: "y",
                got: y.len(),
                expected: x.nrows(),
            });
        }

        let positives = y.iter().filter(|&&c| c == 1).count();
        if positives == 0 || positives == y.len() {
            return Err(PipelineErr::SingleClass {
                class: u8::from(positives > 0),
            });
        }

        let n = x.nrows() as f64;
        let d = x.ncols();

        let mean = x.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(d));
        let scale = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s > 0.0 { s } else { 1.0 });
        let xs = (&x - &mean) / &scale;
        let y: Array1<f64> = y.iter().map(|&c| f64::from(c)).collect();

        // weights followed by the intercept
        let mut params = vec![0.0; d + 1];
        let mut grad = vec![0.0; d + 1];

        for iter in 0..cfg.max_iter {
            let w = ArrayView1::from(&params[..d]);
            let z = xs.dot(&w) + params[d];
            let err = z.mapv(sigmoid) - &y;

            let grad_w = xs.t().dot(&err) / n + &w / (cfg.c * n);
            for (g, gw) in grad.iter_mut().zip(&grad_w) {
                *g = *gw;
            }
            grad[d] = err.sum() / n;

            if grad.iter().all(|g| g.abs() < cfg.tol) {
                debug!("logistic regression converged after {iter} iterations");
                break;
            }

            for (p, g) in params.iter_mut().zip(&grad) {
                *p -= cfg.learning_rate * g;
            }
        }

        let intercept = params.pop().unwrap_or_default();

        Ok(Self {
            mean: mean.to_vec(),
            scale: scale.to_vec(),
            weights: params,
            intercept,
        })
    }

    /// Number of input features the model was fitted on.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn decision_function(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.n_features() {
            return Err(PipelineErr::FeatureCount {
                got: x.ncols(),
                expected: self.n_features(),
            });
        }

        let mean = ArrayView1::from(&self.mean);
        let scale = ArrayView1::from(&self.scale);
        let w = ArrayView1::from(&self.weights);

        let xs = (&x - &mean) / &scale;
        let z = xs.dot(&w) + self.intercept;

        // inf - inf from saturated features has no class to pick
        if z.iter().any(|v| v.is_nan()) {
            return Err(PipelineErr::NonFiniteDecision);
        }

        Ok(z)
    }

    /// Class probabilities, one row per sample: `[P(0), P(1)]`.
    pub fn predict_proba(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let p = self.decision_function(x)?.mapv(sigmoid);

        let mut out = Array2::zeros((p.len(), 2));
        for (mut row, &p1) in out.outer_iter_mut().zip(p.iter()) {
            row[0] = 1.0 - p1;
            row[1] = p1;
        }

        Ok(out)
    }

    /// Predicted class per sample; 1 iff the decision value is strictly positive.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<u8>> {
        Ok(self
            .decision_function(x)?
            .mapv(|z| if z > 0.0 { 1 } else { 0 }))
    }

    /// Serializes the model to `path`, replacing any previous model.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        artifact::write(path, &bytes)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let model: Self = serde_json::from_slice(&bytes)?;

        let d = model.n_features();
        for len in [model.mean.len(), model.scale.len()] {
            if len != d {
                return Err(PipelineErr::FeatureCount {
                    got: len,
                    expected: d,
                });
            }
        }

        Ok(model)
    }
}
