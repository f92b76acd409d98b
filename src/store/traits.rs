//! Best-model store capability

use crate::error::Result;
use sha2::{Digest, Sha256};

/// Storage slot holding the current best model artifact
///
/// One slot, raw bytes. The evaluation stage only ever needs three
/// capabilities: check the slot, read it, replace it. Backends are selected
/// by configuration; the stage code never knows which one it talks to.
pub trait ModelStore: Send + Sync {
    /// True if a usable artifact is present (empty slots count as absent)
    fn exists(&self) -> Result<bool>;

    /// Read the artifact bytes
    fn load(&self) -> Result<Vec<u8>>;

    /// Replace the artifact, overwriting prior content
    fn save(&self, data: &[u8]) -> Result<()>;

    /// Human-readable location of the slot, for artifacts and logs
    fn location(&self) -> String;
}

/// SHA-256 hex digest of artifact bytes
pub fn content_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
