//! Build output and writing it to disk.
//!
//! Writes are atomic per pass: every file goes to a temporary sibling first
//! and is renamed into place only once all of them were written. Filenames
//! are normalized and must stay inside the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::{debug, warn};

use crate::asset::{Asset, AssetKind};
use crate::compilation::Compilation;
use crate::{Error, Result};

/// Everything a compilation pass produced, in emission order.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub assets: Vec<Asset>,
}

impl BuildOutput {
    pub fn from_compilation(compilation: &Compilation) -> Self {
        Self {
            assets: compilation.assets().all_assets(),
        }
    }

    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name() == name)
    }

    /// Markup of a generated page.
    pub fn html(&self, name: &str) -> Option<&str> {
        self.asset(name)
            .filter(|asset| asset.kind() == AssetKind::Html)
            .map(Asset::content)
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(Asset::name)
    }

    /// Write every asset below `dir`.
    ///
    /// With `clean`, the directory is removed first so no artifact of an
    /// earlier pass survives. Returns the written paths.
    pub fn write_to(&self, dir: &Path, clean: bool) -> Result<Vec<PathBuf>> {
        let dir = normalize_dir(dir)?;

        if clean && dir.exists() {
            debug!(dir = %dir.display(), "cleaning output directory");
            fs::remove_dir_all(&dir).map_err(|e| {
                Error::WriteFailure(format!(
                    "Failed to clean output directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        fs::create_dir_all(&dir).map_err(|e| {
            Error::WriteFailure(format!(
                "Failed to create output directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut operations = Vec::with_capacity(self.assets.len());
        for asset in &self.assets {
            let target = validate_output_path(&dir, asset.name())?;
            operations.push((target, asset.content().as_bytes()));
        }

        write_files_atomic(&operations)?;
        Ok(operations.into_iter().map(|(path, _)| path).collect())
    }
}

fn normalize_dir(dir: &Path) -> Result<PathBuf> {
    let cleaned = dir.clean();
    if cleaned.is_absolute() {
        return Ok(cleaned);
    }

    let cwd = std::env::current_dir().map_err(|e| {
        Error::InvalidOutputPath(format!("Failed to get current directory: {}", e))
    })?;
    Ok(cwd.join(cleaned).clean())
}

fn validate_output_path(base_dir: &Path, filename: &str) -> Result<PathBuf> {
    if filename.contains('\0') {
        return Err(Error::InvalidOutputPath(
            "Filename contains null byte".to_string(),
        ));
    }

    let full_path = base_dir.join(Path::new(filename).clean()).clean();
    if !full_path.starts_with(base_dir) || full_path == base_dir {
        return Err(Error::InvalidOutputPath(format!(
            "Path '{}' escapes output directory '{}'",
            filename,
            base_dir.display()
        )));
    }

    Ok(full_path)
}

fn write_files_atomic(operations: &[(PathBuf, &[u8])]) -> Result<()> {
    let mut temp_files: Vec<(PathBuf, PathBuf)> = Vec::new();

    for (target_path, content) in operations {
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                cleanup_temp_files(&temp_files);
                Error::WriteFailure(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut temp_name = target_path.clone().into_os_string();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        fs::write(&temp_path, content).map_err(|e| {
            cleanup_temp_files(&temp_files);
            Error::WriteFailure(format!(
                "Failed to write temporary file '{}': {}",
                temp_path.display(),
                e
            ))
        })?;

        temp_files.push((temp_path, target_path.clone()));
    }

    for (temp_path, target_path) in &temp_files {
        fs::rename(temp_path, target_path).map_err(|e| {
            cleanup_temp_files(&temp_files);
            Error::WriteFailure(format!(
                "Failed to rename '{}' to '{}': {}",
                temp_path.display(),
                target_path.display(),
                e
            ))
        })?;
    }

    Ok(())
}

fn cleanup_temp_files(temp_files: &[(PathBuf, PathBuf)]) {
    for (temp_path, _) in temp_files {
        if temp_path.exists() {
            if let Err(e) = fs::remove_file(temp_path) {
                warn!(path = %temp_path.display(), error = %e, "failed to clean up temporary file");
            }
        }
    }
}
