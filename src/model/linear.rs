//! Linear classifier artifact
//!
//! The serialized predictor produced by the training stage: a weight vector,
//! a bias, and the feature-name schema the model was fitted on. Prediction
//! is a sign test on the linear score.

use crate::error::{Result, StageError};
use crate::model::predictor::Predictor;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Linear binary classifier with a name-based input contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Model name/identifier
    pub name: String,
    /// Per-feature weights, positional
    pub weights: Vec<f64>,
    /// Intercept
    pub bias: f64,
    /// Feature column names the model was trained on, in order.
    /// Empty means the artifact predates schema capture and only the
    /// positional width is checked.
    #[serde(default)]
    pub feature_names: Vec<String>,
}

impl LinearClassifier {
    /// Create a classifier from weights and bias
    pub fn new(name: impl Into<String>, weights: Vec<f64>, bias: f64) -> Self {
        Self {
            name: name.into(),
            weights,
            bias,
            feature_names: Vec::new(),
        }
    }

    /// Attach the feature-name schema
    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = names;
        self
    }

    /// Check that a normalized frame's column names match the training
    /// schema
    ///
    /// The model's input contract is positional and name-based; a drifted
    /// column set is a data-format error, not a silent misprediction.
    pub fn validate_features(&self, names: &[&str]) -> Result<()> {
        if self.feature_names.is_empty() {
            return Ok(());
        }
        if self.feature_names.len() != names.len()
            || self.feature_names.iter().zip(names).any(|(a, b)| a != b)
        {
            return Err(StageError::DataFormat(format!(
                "feature columns {:?} do not match model schema {:?}",
                names, self.feature_names
            )));
        }
        Ok(())
    }
}

impl Predictor for LinearClassifier {
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>> {
        if x.ncols() != self.weights.len() {
            return Err(StageError::DataFormat(format!(
                "feature matrix has {} columns, model expects {}",
                x.ncols(),
                self.weights.len()
            )));
        }
        let labels = x
            .rows()
            .into_iter()
            .map(|row| {
                let score: f64 =
                    row.iter().zip(&self.weights).map(|(v, w)| v * w).sum::<f64>() + self.bias;
                u8::from(score > 0.0)
            })
            .collect();
        Ok(labels)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_predict_deterministic(
            weights in prop::collection::vec(-10.0f64..10.0, 1..6),
            rows in prop::collection::vec(-10.0f64..10.0, 1..6)
        ) {
            let n = weights.len();
            let data: Vec<f64> = rows.iter().cycle().take(n * 3).copied().collect();
            let x = Array2::from_shape_vec((3, n), data).unwrap();
            let model = LinearClassifier::new("p", weights, 0.5);

            let a = model.predict(&x).unwrap();
            let b = model.predict(&x).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_predict_labels_binary(
            weights in prop::collection::vec(-10.0f64..10.0, 1..6),
            bias in -5.0f64..5.0
        ) {
            let n = weights.len();
            let x = Array2::from_elem((4, n), 1.0);
            let model = LinearClassifier::new("p", weights, bias);
            for label in model.predict(&x).unwrap() {
                prop_assert!(label <= 1);
            }
        }
    }
}
