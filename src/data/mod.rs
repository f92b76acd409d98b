//! Test dataset handling
//!
//! - `frame`: column-ordered table with numeric and categorical columns
//! - `loader`: CSV reading and target splitting
//! - `transform`: evaluation-time feature normalization

pub mod frame;
pub mod loader;
pub mod transform;

pub use frame::{Column, Frame};
pub use loader::{read_csv, split_target};
pub use transform::normalize;
