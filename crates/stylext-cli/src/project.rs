//! A loaded project: config plus the directory its paths resolve against.

use std::path::{Path, PathBuf};

use stylext_config::{
    ConfigDiscovery, ConfigValidator, FsValidator, PluginOptions, StylextConfig,
};
use stylext_core::{ChunkSource, Compiler, CompilerOptions, HtmlPageOptions};
use stylext_plugin_script::ScriptExtHtmlPlugin;
use stylext_plugin_style::StyleExtHtmlPlugin;
use tracing::debug;

use crate::error::{CliError, Result, ResultExt};

#[derive(Debug, Clone)]
pub struct Project {
    /// Directory relative paths in the config resolve against
    pub root: PathBuf,
    pub config: StylextConfig,
}

impl Project {
    /// Load the project config.
    ///
    /// With `config` set, the file is read from there (relative to `cwd`) and
    /// its directory becomes the root. Otherwise `cwd` is searched for
    /// `stylext.toml` / `stylext.json`.
    pub fn load(cwd: Option<&Path>, config: Option<&Path>, profile: Option<&str>) -> Result<Self> {
        let cwd = match cwd {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };
        if !cwd.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "working directory does not exist: {}",
                cwd.display()
            )));
        }

        let (root, loaded) = match config {
            Some(path) => {
                let path = cwd.join(path);
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.clone());
                let loaded = ConfigDiscovery::new(&root).load_from(&path)?;
                (root, loaded)
            }
            None => (cwd.clone(), ConfigDiscovery::new(&cwd).load()?),
        };

        let config = loaded.materialize_profile(profile)?;
        debug!(root = %root.display(), profile = ?profile, "project loaded");

        Ok(Self { root, config })
    }

    /// Check the config structure and that every referenced file exists.
    pub fn validate(&self) -> Result<()> {
        FsValidator::new(&self.root).validate(&self.config)?;
        Ok(())
    }

    /// Build a compiler with every chunk, page and plugin of the config.
    ///
    /// Plugins are registered in the order they are listed.
    pub fn compiler(&self) -> Result<Compiler> {
        let output = &self.config.output;
        let mut compiler = Compiler::new(
            CompilerOptions::new(&self.root)
                .output_dir(&output.dir)
                .public_path(&output.public_path)
                .clean(output.clean)
                .filename(&output.filename)
                .css_filename(&output.css_filename),
        );

        for chunk in &self.config.chunks {
            let mut source = ChunkSource::new(&chunk.name);
            for script in &chunk.scripts {
                source = source.script(script);
            }
            for style in &chunk.styles {
                source = source.style(style);
            }
            if let Some(pattern) = &chunk.filename {
                source = source.filename(pattern);
            }
            if let Some(pattern) = &chunk.css_filename {
                source = source.css_filename(pattern);
            }
            compiler.chunk(source);
        }

        for page in &self.config.pages {
            let mut options = HtmlPageOptions::new(&page.filename)
                .title(&page.title)
                .lang(&page.lang);
            if let Some(chunks) = &page.chunks {
                options = options.chunks(chunks.iter().cloned());
            }
            if let Some(template) = &page.template {
                let path = self.root.join(template);
                let source = std::fs::read_to_string(&path).with_path(&path)?;
                options = options.template(source);
            }
            compiler.page(options);
        }

        for plugin in &self.config.plugins {
            match plugin {
                PluginOptions::StyleInline(options) => {
                    compiler.plugin(StyleExtHtmlPlugin::new(options.clone())?)?;
                }
                PluginOptions::ScriptAttributes(options) => {
                    compiler.plugin(ScriptExtHtmlPlugin::new(options.clone())?)?;
                }
            }
        }

        Ok(compiler)
    }
}
