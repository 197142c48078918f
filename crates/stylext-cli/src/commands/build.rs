//! `stylext build`.

use std::time::Instant;

use stylext_core::BuildOutput;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::project::Project;
use crate::ui;

/// Execute the build command.
///
/// 1. Load the config (file < env < profile < CLI flags)
/// 2. Validate it, including that source files exist
/// 3. Compile every page through the plugin chain
/// 4. Write the output directory, cleaning it first unless `--no-clean`
pub fn execute(args: BuildArgs) -> Result<BuildOutput> {
    let start = Instant::now();

    ui::info("Loading configuration...");
    let mut project = Project::load(
        args.project.cwd.as_deref(),
        args.project.config.as_deref(),
        args.project.profile.as_deref(),
    )?;

    // Absolute, so `resolved_output_dir` does not join the project root again.
    if let Some(out_dir) = &args.out_dir {
        let mut base = std::env::current_dir()?;
        if let Some(cwd) = &args.project.cwd {
            base = base.join(cwd);
        }
        project.config.output.dir = base.join(out_dir);
    }
    if args.no_clean {
        project.config.output.clean = false;
    }

    project.validate()?;
    let compiler = project.compiler()?;

    let out_dir = compiler.options().resolved_output_dir();
    ui::info(&format!("Building into {}", out_dir.display()));

    let output = compiler.compile()?;
    let written = output.write_to(&out_dir, compiler.options().clean)?;
    tracing::debug!(files = written.len(), "output written");

    let entries: Vec<(String, u64)> = output
        .assets
        .iter()
        .map(|asset| (asset.name().to_string(), asset.content().len() as u64))
        .collect();
    ui::print_build_summary(&entries);

    ui::success(&format!(
        "Build completed in {}ms",
        start.elapsed().as_millis()
    ));
    Ok(output)
}
