use std::{env, path::PathBuf};

use anyhow::Context;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_PATH: &str = "app/data/desired_manufacturing_dataset.csv";
const DEFAULT_MODEL_PATH: &str = "app/model/logistic_model.json";

/// Locations of the two durable artifacts: the uploaded dataset and the trained model.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    dataset: PathBuf,
    model: PathBuf,
}

impl StoragePaths {
    /// Creates a new `StoragePaths`.
    ///
    /// # Args
    /// * `dataset` - Where uploads are written and training reads from.
    /// * `model` - Where training writes the model and inference reads it.
    pub fn new(dataset: impl Into<PathBuf>, model: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            model: model.into(),
        }
    }

    /// Places both artifacts under `root`, using the default relative layout.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::new(root.join(DEFAULT_DATA_PATH), root.join(DEFAULT_MODEL_PATH))
    }

    pub fn dataset(&self) -> &PathBuf {
        &self.dataset
    }

    pub fn model(&self) -> &PathBuf {
        &self.model
    }
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH, DEFAULT_MODEL_PATH)
    }
}

/// Process-wide settings for the HTTP service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StoragePaths,
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `DATA_PATH` and `MODEL_PATH`, falling back to defaults
    /// for any variable that is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let dataset = env::var("DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        let model = env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());

        Ok(Self {
            host,
            port,
            storage: StoragePaths::new(dataset, model),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_keeps_the_default_layout() {
        let paths = StoragePaths::under("/srv");
        assert_eq!(
            paths.dataset(),
            &PathBuf::from("/srv/app/data/desired_manufacturing_dataset.csv")
        );
        assert_eq!(
            paths.model(),
            &PathBuf::from("/srv/app/model/logistic_model.json")
        );
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = AppConfig {
            host: "0.0.0.0".into(),
            port: 9000,
            storage: StoragePaths::default(),
        };
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
    }
}
