//! # stylext-core
//!
//! The build orchestrator behind stylext: it owns the compilation (assets and
//! chunks), generates HTML pages, and runs every registered [`HtmlPlugin`]
//! over each page in registration order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stylext_core::{ChunkSource, Compiler, CompilerOptions, HtmlPageOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut compiler = Compiler::new(CompilerOptions::new(".").output_dir("dist"));
//! compiler
//!     .chunk(
//!         ChunkSource::new("main")
//!             .script("src/index.js")
//!             .style("src/styles.css"),
//!     )
//!     .page(HtmlPageOptions::default());
//!
//! let output = compiler.run()?;
//! println!("{}", output.html("index.html").unwrap_or_default());
//! # Ok(()) }
//! ```
//!
//! ## Writing a plugin
//!
//! Plugins implement [`HtmlPlugin`] and declare which hooks they use. The
//! context handed to each hook is the only mutable state shared between
//! plugins.
//!
//! ```
//! use std::borrow::Cow;
//! use stylext_core::{Compilation, HookUsage, HtmlGenerationContext, HtmlPlugin};
//!
//! #[derive(Debug)]
//! struct Banner;
//!
//! impl HtmlPlugin for Banner {
//!     fn name(&self) -> Cow<'static, str> {
//!         "banner".into()
//!     }
//!
//!     fn hook_usage(&self) -> HookUsage {
//!         HookUsage::AFTER_HTML_PROCESSING
//!     }
//!
//!     fn after_html_processing(
//!         &self,
//!         ctx: &mut HtmlGenerationContext,
//!         _compilation: &Compilation,
//!     ) -> anyhow::Result<()> {
//!         ctx.html.insert_str(0, "<!-- built by stylext -->\n");
//!         Ok(())
//!     }
//! }
//! ```

pub mod asset;
pub mod chunk;
pub mod compilation;
pub mod compiler;
pub mod hooks;
pub mod html;
pub mod output;

pub use asset::{Asset, AssetKind, AssetRegistry};
pub use chunk::Chunk;
pub use compilation::Compilation;
pub use compiler::{ChunkSource, Compiler, CompilerOptions};
pub use hooks::{HOOK_API_VERSION, HookUsage, HtmlHooks, HtmlPlugin, SharedHtmlPlugin};
pub use html::{AssetTags, HtmlGenerationContext, HtmlPage, HtmlPageOptions, HtmlTag};
pub use output::BuildOutput;

/// Error type for stylext operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A plugin could not be attached to the hook chain.
    #[error("Cannot register plugin '{plugin}': {reason}")]
    Registration { plugin: String, reason: String },

    /// Plugins are registered but no page exists for their hooks to run on.
    #[error("Plugin '{plugin}' has no HTML page to work on")]
    NoPages { plugin: String },

    /// A plugin hook returned an error.
    #[error("Plugin '{plugin}' failed: {message}")]
    Plugin { plugin: String, message: String },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A chunk or page source file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    ReadSource {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Page template failed to compile or render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Link scanning pattern failed to compile.
    #[error("Link scanner error: {0}")]
    LinkScanner(#[from] regex::Error),

    /// Invalid output path (e.g., directory traversal attempt).
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// File write operation failed.
    #[error("Write failure: {0}")]
    WriteFailure(String),
}

/// Result type alias for stylext operations.
pub type Result<T> = std::result::Result<T, Error>;
