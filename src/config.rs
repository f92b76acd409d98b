//! Evaluation stage configuration
//!
//! Plain value objects wired up by the surrounding pipeline code. No CLI
//! flags and no environment variables are read here; configuration arrives
//! as a document or is constructed in code.

use crate::store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the binary target column in the test dataset
pub const TARGET_COLUMN: &str = "Response";

/// Configuration for one evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEvalConfig {
    /// Held-out test dataset (CSV)
    pub test_data_path: PathBuf,
    /// Freshly trained model artifact
    pub trained_model_path: PathBuf,
    /// Where the YAML metrics report is written
    pub report_path: PathBuf,
    /// Target column name
    #[serde(default = "default_target")]
    pub target_column: String,
    /// Best-model slot backend
    pub store: StoreConfig,
}

fn default_target() -> String {
    TARGET_COLUMN.to_string()
}

impl ModelEvalConfig {
    /// Configuration with a local filesystem best-model slot
    pub fn local(
        test_data_path: impl Into<PathBuf>,
        trained_model_path: impl Into<PathBuf>,
        best_model_path: impl Into<PathBuf>,
        report_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            test_data_path: test_data_path.into(),
            trained_model_path: trained_model_path.into(),
            report_path: report_path.into(),
            target_column: default_target(),
            store: StoreConfig::local(best_model_path.into()),
        }
    }

    /// Load a configuration document
    pub fn from_yaml_file(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_local_constructor() {
        let config = ModelEvalConfig::local(
            "data/test.csv",
            "models/trained.json",
            "models/best.json",
            "reports/eval.yaml",
        );
        assert_eq!(config.target_column, "Response");
        assert_eq!(config.store.location(), "models/best.json");
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"test_data_path: data/test.csv\n\
              trained_model_path: models/trained.json\n\
              report_path: reports/eval.yaml\n\
              store: !Local\n  path: models/best.json\n",
        )
        .unwrap();

        let config = ModelEvalConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.test_data_path, PathBuf::from("data/test.csv"));
        // target_column falls back to the default when omitted
        assert_eq!(config.target_column, "Response");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ModelEvalConfig::local("a.csv", "b.json", "c.json", "d.yaml");
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ModelEvalConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.test_data_path, config.test_data_path);
        assert_eq!(parsed.store, config.store);
    }

    #[test]
    fn test_from_yaml_missing_file() {
        assert!(ModelEvalConfig::from_yaml_file("/nonexistent/config.yaml").is_err());
    }
}
