//! Evaluation stage output contract

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the evaluation stage hands to the next pipeline stage
///
/// Created once at the end of a run and never mutated. `best_model_path`
/// names the slot that now holds the authoritative model, whether or not
/// this run replaced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationArtifact {
    /// Whether the trained model was promoted
    pub accepted: bool,
    /// Path of the written metrics report
    pub report_path: PathBuf,
    /// Location of the best-model slot
    pub best_model_path: String,
    /// Path of the trained model that was evaluated
    pub trained_model_path: PathBuf,
    /// When the run finished
    pub evaluated_at: DateTime<Utc>,
}
