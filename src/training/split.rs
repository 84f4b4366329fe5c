use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::error::{PipelineErr, Result};

/// Row indices of a train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffles `0..n_samples` with a generator seeded from `seed` and cuts it in two.
///
/// The test partition takes the first `ceil(test_ratio * n_samples)` shuffled
/// indices and the train partition takes the rest. The same arguments always
/// produce the same partition.
pub fn train_test_split(n_samples: usize, test_ratio: f64, seed: u64) -> Result<Split> {
    let n_test = (test_ratio * n_samples as f64).ceil() as usize;
    let n_train = n_samples.saturating_sub(n_test);

    if n_train == 0 || n_test == 0 {
        return Err(PipelineErr::EmptyTrainSplit {
            n_samples,
            test_ratio,
        });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Ok(Split {
        train,
        test: indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighty_twenty_on_ten_rows() {
        let split = train_test_split(10, 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);
    }

    #[test]
    fn test_side_rounds_up() {
        let split = train_test_split(7, 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.train.len(), 5);
    }

    #[test]
    fn partitions_cover_every_row_once() {
        let split = train_test_split(25, 0.2, 42).unwrap();
        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_split() {
        assert_eq!(
            train_test_split(50, 0.2, 42).unwrap(),
            train_test_split(50, 0.2, 42).unwrap()
        );
    }

    #[test]
    fn too_few_rows_is_an_error() {
        for n in [0, 1] {
            let err = train_test_split(n, 0.2, 42).unwrap_err();
            assert!(matches!(err, PipelineErr::EmptyTrainSplit { n_samples, .. } if n_samples == n));
        }
    }
}
