//! Local filesystem best-model slot

use crate::error::{Result, StageError};
use crate::store::traits::ModelStore;
use std::path::PathBuf;

/// Filesystem-backed model slot
///
/// `exists` treats an empty file as absent: a zero-byte best-model artifact
/// cannot be loaded and is handled like the no-prior-model case. Saves go
/// through a temporary sibling file and a rename, so a concurrent reader of
/// the slot never observes a half-written artifact.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Create a slot at the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn tmp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| StageError::Store(format!("invalid slot path {}", self.path.display())))?
            .to_string_lossy()
            .into_owned();
        Ok(self.path.with_file_name(format!("{file_name}.tmp")))
    }
}

impl ModelStore for LocalStore {
    fn exists(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.is_file() && meta.len() > 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn load(&self) -> Result<Vec<u8>> {
        if !self.exists()? {
            return Err(StageError::Store(format!(
                "no artifact at {}",
                self.path.display()
            )));
        }
        Ok(std::fs::read(&self.path)?)
    }

    fn save(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename keeps the slot atomic on the same filesystem
        let tmp = self.tmp_path()?;
        std::fs::write(&tmp, data)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
