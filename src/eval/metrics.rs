//! Binary classification metrics
//!
//! Positive class is label 1. Undefined ratios (zero denominator) score 0.0,
//! matching the conventions the training stage reports against.

use serde::{Deserialize, Serialize};

/// The four scores computed per model per evaluation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalMetrics {
    pub f1: f64,
    pub precision: f64,
    pub recall: f64,
    pub accuracy: f64,
}

impl EvalMetrics {
    /// Metrics of the last manually approved baseline model
    ///
    /// Substituted verbatim when no best-model artifact exists yet, so the
    /// first trained model is compared against a known floor instead of
    /// being promoted unconditionally. The exact values are load-bearing
    /// for report compatibility; do not round them.
    pub const BASELINE: EvalMetrics = EvalMetrics {
        f1: 0.4358042535618418,
        precision: 0.2874067214989923,
        recall: 0.9010416666666666,
        accuracy: 0.7132181615902937,
    };

    /// Compute metrics from ground truth and predictions
    pub fn from_predictions(y_true: &[u8], y_pred: &[u8]) -> Self {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Predictions and targets must have same length"
        );

        let mut tp = 0u64;
        let mut fp = 0u64;
        let mut fn_ = 0u64;
        let mut tn = 0u64;
        for (&t, &p) in y_true.iter().zip(y_pred) {
            match (t, p) {
                (1, 1) => tp += 1,
                (0, 1) => fp += 1,
                (1, 0) => fn_ += 1,
                _ => tn += 1,
            }
        }

        let tp = tp as f64;
        let fp = fp as f64;
        let fn_ = fn_ as f64;
        let tn = tn as f64;

        let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
        let recall = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        let total = tp + fp + fn_ + tn;
        let accuracy = if total > 0.0 { (tp + tn) / total } else { 0.0 };

        Self {
            f1,
            precision,
            recall,
            accuracy,
        }
    }
}
