//! Stage error taxonomy
//!
//! Every failure in the evaluation stage surfaces as a [`StageError`] with
//! the underlying cause attached. Failures propagate immediately to the
//! caller; there are no retries and no partial recovery.

use thiserror::Error;

/// Errors raised by the model evaluation stage
#[derive(Debug, Error)]
pub enum StageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read dataset: {0}")]
    Dataset(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Malformed data: {0}")]
    DataFormat(String),

    #[error("Model artifact error: {0}")]
    Model(String),

    #[error("Model deserialization failed: {0}")]
    ModelFormat(#[from] serde_json::Error),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_yaml::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for stage operations
pub type Result<T> = std::result::Result<T, StageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_display() {
        let io_err = StageError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(io_err.to_string().contains("IO error"));

        let missing = StageError::MissingColumn("Response".to_string());
        assert!(missing.to_string().contains("Response"));

        let format = StageError::DataFormat("unmapped Gender value".to_string());
        assert!(format.to_string().contains("unmapped"));

        let model = StageError::Model("empty artifact".to_string());
        assert!(model.to_string().contains("empty artifact"));

        let store = StageError::Store("slot locked".to_string());
        assert!(store.to_string().contains("slot locked"));
    }

    #[test]
    fn test_io_error_source_preserved() {
        use std::error::Error as _;
        let err = StageError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(err.source().is_some());
    }
}
