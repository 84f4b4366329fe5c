//! Downtime prediction service.
//!
//! Three stages share two files on disk: `dataset::upload` stores a CSV table,
//! `training::train` fits a logistic regression on it and stores the model, and
//! `inference::predict` classifies single readings with the stored model. `api`
//! exposes each stage as an HTTP route.

pub mod api;
pub mod artifact;
pub mod config;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod model;
pub mod training;

pub use config::{AppConfig, StoragePaths};
pub use error::{ErrorKind, PipelineErr, Result};
