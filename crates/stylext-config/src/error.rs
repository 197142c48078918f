//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("page template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    // Config parsing/loading errors
    #[error("no stylext.toml or stylext.json found in {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid value for '{field}': {hint}")]
    InvalidValue { field: String, hint: String },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("no chunks specified")]
    NoChunks,

    #[error("chunk '{0}' is defined more than once")]
    DuplicateChunk(String),

    #[error("page '{0}' is defined more than once")]
    DuplicatePage(String),

    #[error("{owner} references unknown chunk '{chunk}'")]
    UnknownChunk { owner: String, chunk: String },
}
