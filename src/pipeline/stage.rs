//! Evaluation stage orchestrator
//!
//! One synchronous pass: load the test set, normalize features, score the
//! trained model against the current best, persist the report, promote on
//! acceptance, hand the artifact downstream. Any failing step aborts the
//! run; no partial artifact is returned.

use crate::config::ModelEvalConfig;
use crate::data::loader::{read_csv, split_target};
use crate::data::transform::normalize;
use crate::error::Result;
use crate::eval::evaluator::{evaluate, EvalOutcome};
use crate::eval::report::write_report;
use crate::model::io::{from_slice, load_model};
use crate::model::linear::LinearClassifier;
use crate::model::predictor::Predictor;
use crate::pipeline::artifact::EvaluationArtifact;
use crate::pipeline::promotion::promote;
use crate::store::traits::ModelStore;
use chrono::Utc;
use tracing::info;

/// The model evaluation stage
pub struct ModelEvaluationStage {
    config: ModelEvalConfig,
    store: Box<dyn ModelStore>,
}

impl ModelEvaluationStage {
    /// Build the stage, constructing the configured best-model store
    pub fn new(config: ModelEvalConfig) -> Result<Self> {
        let store = config.store.build()?;
        Ok(Self { config, store })
    }

    /// Build the stage with an explicit store (test seam)
    pub fn with_store(config: ModelEvalConfig, store: Box<dyn ModelStore>) -> Self {
        Self { config, store }
    }

    /// Load the current best model, if the slot holds one
    ///
    /// Absence is not an error: it is the documented no-prior-model case.
    fn best_model(&self) -> Result<Option<LinearClassifier>> {
        if !self.store.exists()? {
            return Ok(None);
        }
        let data = self.store.load()?;
        Ok(Some(from_slice(&data)?))
    }

    /// Score trained vs best on the held-out test set
    pub fn evaluate_model(&self) -> Result<EvalOutcome> {
        let frame = read_csv(&self.config.test_data_path)?;
        let (features, labels) = split_target(frame, &self.config.target_column)?;
        let features = normalize(features)?;

        let trained = load_model(&self.config.trained_model_path)?;
        trained.validate_features(&features.names())?;
        info!(model = %trained.name, "trained model loaded");

        let x = features.to_matrix()?;
        let best = self.best_model()?;
        evaluate(
            &x,
            &labels,
            &trained,
            best.as_ref().map(|m| m as &dyn Predictor),
        )
    }

    /// Run the whole stage and return the artifact for the next stage
    pub fn run(&self) -> Result<EvaluationArtifact> {
        info!("model evaluation stage started");
        let outcome = self.evaluate_model()?;

        write_report(&self.config.report_path, &outcome)?;

        if outcome.accepted {
            promote(&self.config.trained_model_path, self.store.as_ref())?;
        } else {
            info!(
                improvement = outcome.improvement,
                "trained model rejected, best model left untouched"
            );
        }

        Ok(EvaluationArtifact {
            accepted: outcome.accepted,
            report_path: self.config.report_path.clone(),
            best_model_path: self.store.location(),
            trained_model_path: self.config.trained_model_path.clone(),
            evaluated_at: Utc::now(),
        })
    }
}
