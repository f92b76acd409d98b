//! promover — model evaluation and promotion stage
//!
//! Evaluates a freshly trained binary classifier against the previously
//! promoted best model on a held-out test set, decides whether to promote
//! it, and persists a YAML metrics report plus (on acceptance) the promoted
//! model artifact. One synchronous stage of a linear ML pipeline:
//! ingestion → training → **evaluation** → deployment.
//!
//! ## Architecture
//!
//! - `data`: test-set loading and evaluation-time feature normalization
//! - `model`: the `Predictor` seam and the serialized linear classifier
//! - `eval`: metrics, trained-vs-best scoring, report persistence
//! - `store`: the best-model slot (local / memory / object store)
//! - `pipeline`: orchestration, promotion, and the output artifact
//!
//! ## Example
//!
//! ```ignore
//! use promover::{ModelEvalConfig, ModelEvaluationStage};
//!
//! let config = ModelEvalConfig::local(
//!     "artifacts/data/test.csv",
//!     "artifacts/models/trained.json",
//!     "artifacts/models/best.json",
//!     "artifacts/reports/evaluation.yaml",
//! );
//! let artifact = ModelEvaluationStage::new(config)?.run()?;
//! println!("accepted: {}", artifact.accepted);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod model;
pub mod pipeline;
pub mod store;

pub use config::{ModelEvalConfig, TARGET_COLUMN};
pub use error::{Result, StageError};
pub use eval::{EvalMetrics, EvalOutcome, EvalReport};
pub use model::{LinearClassifier, Predictor};
pub use pipeline::{EvaluationArtifact, ModelEvaluationStage};
pub use store::{ModelStore, StoreConfig};
