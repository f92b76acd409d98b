//! Evaluation report persistence
//!
//! The report is a YAML document with a fixed schema consumed by downstream
//! tooling: `trained_model` and `best_model` metric maps, a top-level
//! `improvement` float, and a `model_accepted` bool. An existing report at
//! the path is overwritten; single-writer assumption, no locking.

use crate::error::Result;
use crate::eval::evaluator::EvalOutcome;
use crate::eval::metrics::EvalMetrics;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// On-disk report schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub trained_model: EvalMetrics,
    pub best_model: EvalMetrics,
    pub improvement: f64,
    pub model_accepted: bool,
}

impl From<&EvalOutcome> for EvalReport {
    fn from(outcome: &EvalOutcome) -> Self {
        Self {
            trained_model: outcome.trained,
            best_model: outcome.best,
            improvement: outcome.improvement,
            model_accepted: outcome.accepted,
        }
    }
}

/// Write the report, creating parent directories as needed
pub fn write_report(path: impl AsRef<Path>, outcome: &EvalOutcome) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let report = EvalReport::from(outcome);
    let yaml = serde_yaml::to_string(&report)?;
    std::fs::write(path, yaml)?;
    info!(path = %path.display(), "evaluation report saved");
    Ok(())
}

/// Parse a previously written report
pub fn read_report(path: impl AsRef<Path>) -> Result<EvalReport> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_yaml::from_str(&content)?)
}
