//! Stage orchestration
//!
//! - `stage`: the end-to-end evaluation run
//! - `promotion`: copying an accepted model into the best slot
//! - `artifact`: the output contract handed downstream

pub mod artifact;
pub mod promotion;
pub mod stage;

pub use artifact::EvaluationArtifact;
pub use promotion::promote;
pub use stage::ModelEvaluationStage;
