//! Predictor capability seam

use crate::error::Result;
use ndarray::Array2;

/// A scored classifier: rows of features in, binary labels out
///
/// Both the freshly trained model and the promoted best model are evaluated
/// through this trait; the evaluator never sees a concrete model type.
pub trait Predictor: Send + Sync {
    /// Predict a binary label per row of the feature matrix
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>>;
}
