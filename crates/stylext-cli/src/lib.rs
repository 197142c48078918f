//! Command-line interface for stylext.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `build` and `check`
//! - [`project`] - turns a loaded config into a configured [`Compiler`](stylext_core::Compiler)
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing setup
//! - [`ui`] - terminal status output
//!
//! # Example
//!
//! ```rust,no_run
//! use stylext_cli::{error::Result, logger, project::Project};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     let project = Project::load(None, None, Some("production"))?;
//!     project.validate()?;
//!     project.compiler()?.run()?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod project;
pub mod ui;

pub use error::{BuildError, CliError, Result, ResultExt};
