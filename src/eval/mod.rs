//! Model evaluation
//!
//! - `metrics`: binary classification metrics and the baseline constants
//! - `evaluator`: trained-vs-best scoring and the promotion decision
//! - `report`: YAML report persistence

pub mod evaluator;
pub mod metrics;
pub mod report;

pub use evaluator::{evaluate, EvalOutcome};
pub use metrics::EvalMetrics;
pub use report::{read_report, write_report, EvalReport};
