//! Object-store best-model slot (mock)
//!
//! Stands in for the production object-store backend: configuration carries
//! the real bucket coordinates, the data path runs against an in-memory
//! slot. A real implementation would swap the inner slot for an SDK client
//! behind the same [`ModelStore`] surface.

use crate::error::Result;
use crate::store::memory::MemoryStore;
use crate::store::traits::ModelStore;
use serde::{Deserialize, Serialize};

/// Object-store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket name
    pub bucket: String,
    /// Object key of the best-model slot
    pub key: String,
    /// Region (e.g. "us-east-1")
    pub region: Option<String>,
    /// Custom endpoint (MinIO, R2, ...)
    pub endpoint: Option<String>,
}

impl S3Config {
    /// Create a configuration for a bucket and object key
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
            region: None,
            endpoint: None,
        }
    }

    /// Set the region
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Set a custom endpoint
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }
}

/// Mock object-store slot
#[derive(Debug, Clone)]
pub struct MockS3Store {
    config: S3Config,
    inner: MemoryStore,
}

impl MockS3Store {
    /// Create a mock slot for the given configuration
    pub fn new(config: S3Config) -> Self {
        Self {
            config,
            inner: MemoryStore::new(),
        }
    }

    /// The configuration this slot was built from
    pub fn config(&self) -> &S3Config {
        &self.config
    }
}

impl ModelStore for MockS3Store {
    fn exists(&self) -> Result<bool> {
        self.inner.exists()
    }

    fn load(&self) -> Result<Vec<u8>> {
        self.inner.load()
    }

    fn save(&self, data: &[u8]) -> Result<()> {
        self.inner.save(data)
    }

    fn location(&self) -> String {
        format!("s3://{}/{}", self.config.bucket, self.config.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3_config_builder() {
        let config = S3Config::new("models", "prod/best.json")
            .with_region("us-east-1")
            .with_endpoint("http://localhost:9000");
        assert_eq!(config.bucket, "models");
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_mock_s3_roundtrip() {
        let store = MockS3Store::new(S3Config::new("models", "best.json"));
        assert!(!store.exists().unwrap());
        store.save(b"artifact").unwrap();
        assert_eq!(store.load().unwrap(), b"artifact");
    }

    #[test]
    fn test_mock_s3_location() {
        let store = MockS3Store::new(S3Config::new("models", "prod/best.json"));
        assert_eq!(store.location(), "s3://models/prod/best.json");
    }

    #[test]
    fn test_s3_config_serde() {
        let config = S3Config::new("models", "best.json").with_region("eu-west-1");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: S3Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
