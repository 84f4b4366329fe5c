use crate::error::{PipelineErr, Result};

fn same_length(y_true: &[u8], y_pred: &[u8]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(PipelineErr::SizeMismatch {
            a: "y_true",
            b: "y_pred",
            got: y_pred.len(),
            expected: y_true.len(),
        });
    }
    Ok(())
}

/// Fraction of positions where `y_true` and `y_pred` agree.
pub fn accuracy(y_true: &[u8], y_pred: &[u8]) -> Result<f64> {
    same_length(y_true, y_pred)?;
    if y_true.is_empty() {
        return Ok(0.0);
    }

    let hits = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    Ok(hits as f64 / y_true.len() as f64)
}

/// Binary F1 score for the positive label `1`.
///
/// Defined as `0.0` when there are neither predicted nor actual positives.
pub fn f1_score(y_true: &[u8], y_pred: &[u8]) -> Result<f64> {
    same_length(y_true, y_pred)?;

    let (mut tp, mut fp, mut fn_) = (0usize, 0usize, 0usize);
    for (&t, &p) in y_true.iter().zip(y_pred) {
        match (t, p) {
            (1, 1) => tp += 1,
            (0, 1) => fp += 1,
            (1, 0) => fn_ += 1,
            _ => {}
        }
    }

    let denom = 2 * tp + fp + fn_;
    if denom == 0 {
        return Ok(0.0);
    }

    Ok((2 * tp) as f64 / denom as f64)
}
