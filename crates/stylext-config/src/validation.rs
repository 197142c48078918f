//! Pluggable config validation strategies
//!
//! Schema validation only looks at the config itself; filesystem validation
//! additionally checks that every referenced file exists.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::StylextConfig;
use crate::error::{ConfigError, Result};
use crate::plugin::PluginOptions;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &StylextConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use stylext_config::{ChunkOptions, ConfigValidator, SchemaValidator, StylextConfig};
///
/// let mut config = StylextConfig::default();
/// config.chunks.push(ChunkOptions {
///     name: "main".into(),
///     styles: vec!["styles.css".into()],
///     ..ChunkOptions::default()
/// });
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &StylextConfig) -> Result<()> {
        if config.chunks.is_empty() {
            return Err(ConfigError::NoChunks);
        }

        let mut chunk_names = HashSet::new();
        for chunk in &config.chunks {
            if chunk.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "chunks.name".to_string(),
                    hint: "chunk names must not be empty".to_string(),
                });
            }
            if !chunk_names.insert(chunk.name.as_str()) {
                return Err(ConfigError::DuplicateChunk(chunk.name.clone()));
            }
            if chunk.scripts.is_empty() && chunk.styles.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("chunks.{}", chunk.name),
                    hint: "add at least one script or style".to_string(),
                });
            }
        }

        let check_refs = |owner: String, chunks: Option<&Vec<String>>| -> Result<()> {
            for chunk in chunks.into_iter().flatten() {
                if !chunk_names.contains(chunk.as_str()) {
                    return Err(ConfigError::UnknownChunk {
                        owner: owner.clone(),
                        chunk: chunk.clone(),
                    });
                }
            }
            Ok(())
        };

        let mut page_names = HashSet::new();
        for page in &config.pages {
            if !page_names.insert(page.filename.as_str()) {
                return Err(ConfigError::DuplicatePage(page.filename.clone()));
            }
            check_refs(format!("page '{}'", page.filename), page.chunks.as_ref())?;
        }

        for (index, plugin) in config.plugins.iter().enumerate() {
            if let PluginOptions::StyleInline(options) = plugin {
                check_refs(format!("plugin #{} (style-inline)", index + 1), options.chunks.as_ref())?;
            }
        }

        Ok(())
    }
}

/// Schema validation plus existence checks for source files and templates
///
/// Relative paths are resolved against `root`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &StylextConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for chunk in &config.chunks {
            for source in chunk.scripts.iter().chain(&chunk.styles) {
                let path = self.resolve(source);
                if !path.is_file() {
                    return Err(ConfigError::SourceNotFound(path));
                }
            }
        }

        for template in config.pages.iter().filter_map(|page| page.template.as_ref()) {
            let path = self.resolve(template);
            if !path.is_file() {
                return Err(ConfigError::TemplateNotFound(path));
            }
        }

        Ok(())
    }
}

/// Validate config structure only
pub fn validate_schema(config: &StylextConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Validate config structure and referenced files below `root`
pub fn validate_fs(config: &StylextConfig, root: impl Into<PathBuf>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
