//! `stylext check`.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::project::Project;
use crate::ui;

/// Execute the check command.
///
/// Runs the same pipeline as `build` in memory: config loading, validation,
/// plugin construction and page generation. Nothing is written.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let project = Project::load(
        args.project.cwd.as_deref(),
        args.project.config.as_deref(),
        args.project.profile.as_deref(),
    )?;

    project.validate()?;
    ui::success(&format!(
        "Configuration is valid: {} chunks, {} pages, {} plugins",
        project.config.chunks.len(),
        project.config.pages.len(),
        project.config.plugins.len()
    ));

    if project.config.pages.is_empty() {
        ui::warning("No [[pages]] configured, only chunk assets will be written");
    }

    let compiler = project.compiler()?;
    let output = compiler.compile()?;
    ui::success(&format!(
        "All checks passed, a build would write {} files",
        output.assets.len()
    ));

    Ok(())
}
