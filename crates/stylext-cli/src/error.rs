//! Error handling for the stylext CLI.
//!
//! - [`CliError`] is what every command returns
//! - [`BuildError`] wraps failures from the compiler and plugin construction
//! - config errors come straight from `stylext-config`
//!
//! # Example
//!
//! ```rust,no_run
//! use stylext_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_template(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;

use stylext_config::ConfigError;
use stylext_plugin_script::ScriptError;
use stylext_plugin_style::StyleError;
use thiserror::Error;

pub use report::cli_error_to_miette;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Compile(#[from] stylext_core::Error),

    #[error("style-inline plugin: {0}")]
    Style(#[from] StyleError),

    #[error("script-attributes plugin: {0}")]
    Script(#[from] ScriptError),
}

impl From<stylext_core::Error> for CliError {
    fn from(err: stylext_core::Error) -> Self {
        CliError::Build(BuildError::Compile(err))
    }
}

impl From<StyleError> for CliError {
    fn from(err: StyleError) -> Self {
        CliError::Build(BuildError::Style(err))
    }
}

impl From<ScriptError> for CliError {
    fn from(err: ScriptError) -> Self {
        CliError::Build(BuildError::Script(err))
    }
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Adds context to fallible results.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
