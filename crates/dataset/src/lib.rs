//! # IndexScope Dataset
//!
//! The single source of index records for the rest of the workspace.
//!
//! The universe is either compiled in (`Dataset::embedded`) or read once from a JSON
//! file at startup. Either way it is validated on construction (unique names, finite
//! figures, non-negative risk) and immutable afterwards; clones share the same
//! backing storage.

mod embedded;
pub mod error;
pub mod loader;
pub mod repository;

pub use error::DatasetError;
pub use loader::load;
pub use repository::Dataset;
