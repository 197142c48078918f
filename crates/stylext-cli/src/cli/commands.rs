use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate pages and write every asset to the output directory
    Build(BuildArgs),

    /// Validate the configuration and check that referenced files exist
    Check(CheckArgs),
}

/// Options shared by every command that loads a project.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Path to the config file
    ///
    /// Defaults to stylext.toml, then stylext.json, in the working directory.
    /// Relative paths in the config resolve against the file's directory.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Config profile to apply on top of the base config
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Working directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory, overriding `output.dir`
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Keep existing files in the output directory
    #[arg(long)]
    pub no_clean: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
