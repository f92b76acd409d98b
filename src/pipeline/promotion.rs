//! Model promotion
//!
//! Copies the trained model's serialized artifact into the best-model slot.
//! This is the only externally visible side effect of the stage besides the
//! report. Rejected models never touch the slot.

use crate::error::{Result, StageError};
use crate::store::traits::{content_digest, ModelStore};
use std::path::Path;
use tracing::info;

/// Promote the trained artifact into the best-model slot
///
/// Returns the SHA-256 digest of the promoted bytes.
pub fn promote(trained_model_path: &Path, store: &dyn ModelStore) -> Result<String> {
    let data = std::fs::read(trained_model_path)?;
    if data.is_empty() {
        return Err(StageError::Model(format!(
            "trained model artifact at {} is empty",
            trained_model_path.display()
        )));
    }
    store.save(&data)?;
    let digest = content_digest(&data);
    info!(
        location = %store.location(),
        digest = %digest,
        "new best model saved"
    );
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_promote_copies_bytes_exactly() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trained.json");
        std::fs::write(&path, b"{\"weights\":[1.0]}").unwrap();

        let store = MemoryStore::new();
        promote(&path, &store).unwrap();

        assert_eq!(store.load().unwrap(), std::fs::read(&path).unwrap());
    }

    #[test]
    fn test_promote_returns_digest_of_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trained.json");
        std::fs::write(&path, b"artifact").unwrap();

        let store = MemoryStore::new();
        let digest = promote(&path, &store).unwrap();
        assert_eq!(digest, content_digest(b"artifact"));
    }

    #[test]
    fn test_promote_missing_artifact_errors() {
        let store = MemoryStore::new();
        let result = promote(Path::new("/nonexistent/trained.json"), &store);
        assert!(matches!(result, Err(StageError::Io(_))));
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn test_promote_empty_artifact_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trained.json");
        std::fs::write(&path, b"").unwrap();

        let store = MemoryStore::new();
        let result = promote(&path, &store);
        assert!(matches!(result, Err(StageError::Model(_))));
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn test_promote_overwrites_prior_best() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trained.json");
        std::fs::write(&path, b"new model").unwrap();

        let store = MemoryStore::new();
        store.save(b"old model").unwrap();
        promote(&path, &store).unwrap();
        assert_eq!(store.load().unwrap(), b"new model");
    }
}
