use std::{error::Error, fmt, io, str::Utf8Error};

use crate::dataset::REQUIRED_COLUMNS;

/// The result type used by every pipeline stage.
pub type Result<T> = std::result::Result<T, PipelineErr>;

/// Coarse classification of a `PipelineErr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A stage ran before the artifact it depends on exists.
    Precondition,
    /// The uploaded table lacks a required column.
    Validation,
    /// Anything else: I/O, parsing, fitting, (de)serialization.
    Unexpected,
}

/// All errors the ingestion, training and inference stages can produce.
#[derive(Debug)]
pub enum PipelineErr {
    DatasetMissing,
    ModelMissing,
    MissingColumns,
    Io(io::Error),
    Encoding(Utf8Error),
    Csv(csv::Error),
    NoColumns,
    RowWidth {
        line: usize,
        expected: usize,
        got: usize,
    },
    NotANumber {
        value: String,
    },
    UnknownColumn {
        name: String,
    },
    NonBinaryLabel {
        value: f64,
    },
    EmptyTrainSplit {
        n_samples: usize,
        test_ratio: f64,
    },
    SingleClass {
        class: u8,
    },
    FeatureCount {
        got: usize,
        expected: usize,
    },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    NonFiniteDecision,
    Serde(serde_json::Error),
    Blocking(String),
}

impl PipelineErr {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DatasetMissing | Self::ModelMissing => ErrorKind::Precondition,
            Self::MissingColumns => ErrorKind::Validation,
            _ => ErrorKind::Unexpected,
        }
    }
}

impl fmt::Display for PipelineErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetMissing => {
                write!(f, "Dataset not found. Please upload a dataset first.")
            }
            Self::ModelMissing => {
                write!(f, "Model not trained yet. Please train the model first.")
            }
            Self::MissingColumns => {
                let cols: Vec<String> =
                    REQUIRED_COLUMNS.iter().map(|c| format!("'{c}'")).collect();
                write!(f, "Dataset must contain columns: {{{}}}", cols.join(", "))
            }
            Self::Io(e) => write!(f, "{e}"),
            Self::Encoding(e) => write!(f, "invalid utf-8 in dataset: {e}"),
            Self::Csv(e) => write!(f, "Error tokenizing data. {e}"),
            Self::NoColumns => write!(f, "No columns to parse from file"),
            Self::RowWidth {
                line,
                expected,
                got,
            } => write!(
                f,
                "Error tokenizing data. Expected {expected} fields in line {line}, saw {got}"
            ),
            Self::NotANumber { value } => {
                write!(f, "could not convert string to float: '{value}'")
            }
            Self::UnknownColumn { name } => write!(f, "column not found: '{name}'"),
            Self::NonBinaryLabel { value } => {
                write!(f, "Downtime_Flag must be binary 0/1, got '{value}'")
            }
            Self::EmptyTrainSplit {
                n_samples,
                test_ratio,
            } => write!(
                f,
                "With n_samples={n_samples}, test_size={test_ratio} and train_size=None, the \
                 resulting train set will be empty. Adjust any of the aforementioned parameters."
            ),
            Self::SingleClass { class } => write!(
                f,
                "This solver needs samples of at least 2 classes in the data, but the data \
                 contains only one class: {class}"
            ),
            Self::FeatureCount { got, expected } => write!(
                f,
                "X has {got} features, but LogisticRegression is expecting {expected} features as input."
            ),
            Self::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            Self::NonFiniteDecision => write!(
                f,
                "Input produced a NaN decision value; the features are outside the model's \
                 numeric range."
            ),
            Self::Serde(e) => write!(f, "{e}"),
            Self::Blocking(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for PipelineErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Encoding(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PipelineErr {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<Utf8Error> for PipelineErr {
    fn from(e: Utf8Error) -> Self {
        Self::Encoding(e)
    }
}

impl From<csv::Error> for PipelineErr {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<serde_json::Error> for PipelineErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}
