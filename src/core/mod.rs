// Public modules
pub mod assets;
pub mod config;
pub mod database;
pub mod error;
pub mod filesystem;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod record;
pub mod sidecar;
pub mod store;
pub mod tech;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{BuildItem, BuildSummary, ProjectOutcome, Source};
pub use record::{DbProjectRecord, DbTechEntry, MediaAsset, ProjectRecord, TechEntry};
