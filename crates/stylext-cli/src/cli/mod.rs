//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `stylext build` - generate pages and write them to the output directory
//! - `stylext check` - load and validate the configuration without building

mod commands;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command, ProjectArgs};

/// stylext - HTML pages with inlined stylesheets
#[derive(Parser, Debug)]
#[command(
    name = "stylext",
    version,
    about = "Build HTML pages with their stylesheets inlined",
    long_about = "stylext concatenates each chunk's scripts and stylesheets, generates HTML\n\
                  pages that reference them, and runs the configured plugins over every\n\
                  page, such as inlining stylesheets into <style> tags."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
