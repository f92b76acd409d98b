//! Model evaluator
//!
//! Scores the freshly trained model and the current best model against one
//! test set and derives the promotion decision. When no best model exists
//! the fixed [`EvalMetrics::BASELINE`] stands in for it.

use crate::error::{Result, StageError};
use crate::eval::metrics::EvalMetrics;
use crate::model::predictor::Predictor;
use ndarray::Array2;
use tracing::info;

/// Outcome of one evaluation run
///
/// `accepted` is strict: a trained model that only ties the best f1 is not
/// promoted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalOutcome {
    /// Metrics of the freshly trained model
    pub trained: EvalMetrics,
    /// Metrics of the current best model (or the baseline stand-in)
    pub best: EvalMetrics,
    /// trained.f1 - best.f1
    pub improvement: f64,
    /// improvement > 0
    pub accepted: bool,
}

impl EvalOutcome {
    /// Derive the decision from the two metric sets
    pub fn new(trained: EvalMetrics, best: EvalMetrics) -> Self {
        let improvement = trained.f1 - best.f1;
        Self {
            trained,
            best,
            improvement,
            accepted: improvement > 0.0,
        }
    }
}

/// Score two models against one labeled feature matrix
///
/// `best` absent means "no prior model": the baseline constants are
/// reported for the best-model side instead of a real score.
pub fn evaluate(
    x: &Array2<f64>,
    y: &[u8],
    trained: &dyn Predictor,
    best: Option<&dyn Predictor>,
) -> Result<EvalOutcome> {
    let trained_metrics = score(x, y, trained)?;
    info!(
        f1 = trained_metrics.f1,
        accuracy = trained_metrics.accuracy,
        "trained model scored"
    );

    let best_metrics = match best {
        Some(model) => {
            let m = score(x, y, model)?;
            info!(f1 = m.f1, "best model scored");
            m
        }
        None => {
            info!("no best model present, using baseline metrics");
            EvalMetrics::BASELINE
        }
    };

    Ok(EvalOutcome::new(trained_metrics, best_metrics))
}

fn score(x: &Array2<f64>, y: &[u8], model: &dyn Predictor) -> Result<EvalMetrics> {
    let y_pred = model.predict(x)?;
    if y_pred.len() != y.len() {
        return Err(StageError::DataFormat(format!(
            "model produced {} predictions for {} rows",
            y_pred.len(),
            y.len()
        )));
    }
    Ok(EvalMetrics::from_predictions(y, &y_pred))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::model::linear::LinearClassifier;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_accepted_iff_strictly_better(
            trained_f1 in 0.0f64..1.0,
            best_f1 in 0.0f64..1.0
        ) {
            let mk = |f1| EvalMetrics { f1, precision: 0.0, recall: 0.0, accuracy: 0.0 };
            let outcome = EvalOutcome::new(mk(trained_f1), mk(best_f1));
            prop_assert_eq!(outcome.accepted, trained_f1 - best_f1 > 0.0);
        }

        #[test]
        fn prop_evaluate_deterministic(
            labels in prop::collection::vec(0u8..2, 1..60),
            weight in -2.0f64..2.0
        ) {
            let n = labels.len();
            let data: Vec<f64> = labels.iter().map(|&l| f64::from(l)).collect();
            let x = Array2::from_shape_vec((n, 1), data).unwrap();
            let model = LinearClassifier::new("p", vec![weight], -0.5);

            let a = evaluate(&x, &labels, &model, None).unwrap();
            let b = evaluate(&x, &labels, &model, None).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
