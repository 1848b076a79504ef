pub mod enums;
pub mod error;
pub mod record;

// Re-export the core types to provide a clean public API.
pub use enums::{Category, CategoryFilter, Quadrant, SortKey};
pub use error::CoreError;
pub use record::IndexRecord;
