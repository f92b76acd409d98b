//! Predictor trait and the serialized linear classifier artifact

pub mod io;
pub mod linear;
pub mod predictor;

pub use io::{from_slice, load_model, save_model};
pub use linear::LinearClassifier;
pub use predictor::Predictor;
