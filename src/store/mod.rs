//! Best-model artifact storage
//!
//! The promoted "best" model lives in a single slot behind the
//! [`ModelStore`] capability: local filesystem, in-memory, or object store,
//! selected by [`StoreConfig`].

pub mod config;
pub mod local;
pub mod memory;
pub mod s3;
pub mod traits;

pub use config::StoreConfig;
pub use local::LocalStore;
pub use memory::MemoryStore;
pub use s3::{MockS3Store, S3Config};
pub use traits::{content_digest, ModelStore};
