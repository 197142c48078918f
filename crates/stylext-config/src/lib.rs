//! Configuration for stylext projects.
//!
//! Types here are plain serde structures. Discovery layers defaults, the
//! project's `stylext.toml` / `stylext.json` and `STYLEXT_` environment
//! variables with figment; validation is split into schema-only and
//! filesystem checks.

pub mod config;
pub mod discovery;
pub mod error;
pub mod helpers;
pub mod options;
pub mod plugin;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use options::*;
pub use plugin::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover, discover_with_profile};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
