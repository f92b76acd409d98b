//! Store backend selection

use crate::error::Result;
use crate::store::local::LocalStore;
use crate::store::memory::MemoryStore;
use crate::store::s3::{MockS3Store, S3Config};
use crate::store::traits::ModelStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Best-model store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreConfig {
    /// Local filesystem slot
    Local { path: PathBuf },
    /// In-memory slot (testing)
    Memory,
    /// Object-store slot
    S3(S3Config),
}

impl StoreConfig {
    /// Local filesystem configuration
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    /// Build the configured store
    pub fn build(&self) -> Result<Box<dyn ModelStore>> {
        match self {
            Self::Local { path } => Ok(Box::new(LocalStore::new(path.clone()))),
            Self::Memory => Ok(Box::new(MemoryStore::new())),
            Self::S3(config) => Ok(Box::new(MockS3Store::new(config.clone()))),
        }
    }

    /// Location string without building the store
    pub fn location(&self) -> String {
        match self {
            Self::Local { path } => path.display().to_string(),
            Self::Memory => "memory".to_string(),
            Self::S3(config) => format!("s3://{}/{}", config.bucket, config.key),
        }
    }
}
