//! Model artifact loading and saving
//!
//! Artifacts are JSON documents. A missing or empty trained-model artifact
//! is an error: predictions cannot be scored without it. (Absence of the
//! *best* model is handled by the store, not here.)

use crate::error::{Result, StageError};
use crate::model::linear::LinearClassifier;
use std::path::Path;

/// Load a model artifact from a file
pub fn load_model(path: impl AsRef<Path>) -> Result<LinearClassifier> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    if data.is_empty() {
        return Err(StageError::Model(format!(
            "model artifact at {} is empty",
            path.display()
        )));
    }
    from_slice(&data)
}

/// Deserialize a model artifact from raw bytes
pub fn from_slice(data: &[u8]) -> Result<LinearClassifier> {
    Ok(serde_json::from_slice(data)?)
}

/// Save a model artifact, creating parent directories as needed
pub fn save_model(model: &LinearClassifier, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(model)?;
    std::fs::write(path, data)?;
    Ok(())
}
