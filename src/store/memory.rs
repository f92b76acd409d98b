//! In-memory best-model slot for testing

use crate::error::{Result, StageError};
use crate::store::traits::ModelStore;
use std::sync::{Arc, RwLock};

/// In-memory model slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModelStore for MemoryStore {
    fn exists(&self) -> Result<bool> {
        let guard = self.data.read().map_err(|e| StageError::Store(e.to_string()))?;
        Ok(guard.as_ref().is_some_and(|d| !d.is_empty()))
    }

    fn load(&self) -> Result<Vec<u8>> {
        self.data
            .read()
            .map_err(|e| StageError::Store(e.to_string()))?
            .clone()
            .ok_or_else(|| StageError::Store("no artifact in memory slot".to_string()))
    }

    fn save(&self, data: &[u8]) -> Result<()> {
        *self.data.write().map_err(|e| StageError::Store(e.to_string()))? = Some(data.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
