//! Compilation driver: extraction, HTML generation and asset pruning.

use indexmap::{IndexMap, IndexSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::chunk::Chunk;
use crate::compilation::Compilation;
use crate::hooks::{HtmlHooks, HtmlPlugin};
use crate::html::{HtmlPage, HtmlPageOptions, LinkScanner};
use crate::output::BuildOutput;
use crate::{Error, Result};

/// Compiler-wide options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Directory that relative source paths are resolved against.
    pub context: PathBuf,

    /// Output directory, relative to `context` unless absolute (default: "dist")
    pub output_dir: PathBuf,

    /// Prefix for asset URLs in generated pages (default: "")
    pub public_path: String,

    /// Remove the output directory before writing (default: true)
    pub clean: bool,

    /// Script filename pattern; `[name]` is the chunk name (default: "[name].js")
    pub filename: String,

    /// Stylesheet filename pattern (default: "[name].css")
    pub css_filename: String,
}

impl CompilerOptions {
    pub fn new(context: impl Into<PathBuf>) -> Self {
        Self {
            context: context.into(),
            output_dir: PathBuf::from("dist"),
            public_path: String::new(),
            clean: true,
            filename: "[name].js".to_string(),
            css_filename: "[name].css".to_string(),
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = public_path.into();
        self
    }

    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn filename(mut self, pattern: impl Into<String>) -> Self {
        self.filename = pattern.into();
        self
    }

    pub fn css_filename(mut self, pattern: impl Into<String>) -> Self {
        self.css_filename = pattern.into();
        self
    }

    /// Output directory resolved against the context.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.context.join(&self.output_dir)
    }
}

/// Source files for one chunk.
///
/// Scripts are concatenated into one script asset and styles into one
/// stylesheet asset; nothing is parsed or resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkSource {
    pub name: String,
    pub scripts: Vec<PathBuf>,
    pub styles: Vec<PathBuf>,
    /// Overrides [`CompilerOptions::filename`] for this chunk.
    pub filename: Option<String>,
    /// Overrides [`CompilerOptions::css_filename`] for this chunk.
    pub css_filename: Option<String>,
}

impl ChunkSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn script(mut self, path: impl Into<PathBuf>) -> Self {
        self.scripts.push(path.into());
        self
    }

    pub fn style(mut self, path: impl Into<PathBuf>) -> Self {
        self.styles.push(path.into());
        self
    }

    pub fn filename(mut self, pattern: impl Into<String>) -> Self {
        self.filename = Some(pattern.into());
        self
    }

    pub fn css_filename(mut self, pattern: impl Into<String>) -> Self {
        self.css_filename = Some(pattern.into());
        self
    }
}

/// Runs compilation passes.
///
/// Each call to [`compile`](Self::compile) builds a fresh [`Compilation`];
/// plugins see no state from earlier passes.
#[derive(Debug, Clone)]
pub struct Compiler {
    options: CompilerOptions,
    chunks: Vec<ChunkSource>,
    pages: Vec<HtmlPage>,
    hooks: HtmlHooks,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            options,
            chunks: Vec::new(),
            pages: Vec::new(),
            hooks: HtmlHooks::new(),
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn chunk(&mut self, source: ChunkSource) -> &mut Self {
        self.chunks.push(source);
        self
    }

    pub fn page(&mut self, options: HtmlPageOptions) -> &mut Self {
        self.pages.push(HtmlPage::new(options));
        self
    }

    /// Register a plugin at the end of the hook chain.
    pub fn plugin<P: HtmlPlugin + 'static>(&mut self, plugin: P) -> Result<&mut Self> {
        self.hooks.register(plugin)?;
        Ok(self)
    }

    pub fn hooks(&self) -> &HtmlHooks {
        &self.hooks
    }

    /// Read every chunk source into a fresh compilation.
    pub fn extract(&self) -> Result<Compilation> {
        let mut compilation = Compilation::new().with_public_path(&self.options.public_path);
        let mut owners: IndexMap<String, String> = IndexMap::new();

        for source in &self.chunks {
            if compilation.chunk(&source.name).is_some() {
                return Err(Error::InvalidConfig(format!(
                    "chunk '{}' is defined more than once",
                    source.name
                )));
            }

            let mut chunk = Chunk::new(&source.name);
            let outputs = [
                (
                    source.filename.as_deref().unwrap_or(&self.options.filename),
                    &source.scripts,
                ),
                (
                    source
                        .css_filename
                        .as_deref()
                        .unwrap_or(&self.options.css_filename),
                    &source.styles,
                ),
            ];

            for (pattern, files) in outputs {
                if files.is_empty() {
                    continue;
                }

                let name = pattern.replace("[name]", &source.name);
                if let Some(owner) = owners.insert(name.clone(), source.name.clone()) {
                    return Err(Error::InvalidConfig(format!(
                        "chunks '{}' and '{}' both emit '{}'",
                        owner, source.name, name
                    )));
                }

                let content = self.concat_sources(files)?;
                debug!(chunk = %source.name, asset = %name, bytes = content.len(), "extracted asset");
                compilation.emit_asset(name.clone(), content);
                chunk.files.push(name);
            }

            compilation.add_chunk(chunk);
        }

        Ok(compilation)
    }

    fn concat_sources(&self, files: &[PathBuf]) -> Result<String> {
        let mut parts = Vec::with_capacity(files.len());
        for file in files {
            let path = self.resolve(file);
            let content = std::fs::read_to_string(&path)
                .map_err(|source| Error::ReadSource { path, source })?;
            parts.push(content);
        }
        Ok(parts.join("\n"))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.options.context.join(path)
    }

    /// Run a full pass in memory.
    pub fn compile(&self) -> Result<BuildOutput> {
        self.check_stage()?;
        let compilation = self.extract()?;
        self.compile_from(compilation)
    }

    /// Run the HTML stage on an already populated compilation.
    pub fn compile_from(&self, compilation: Compilation) -> Result<BuildOutput> {
        self.check_stage()?;

        let scanner = LinkScanner::new()?;
        let mut inlined: IndexSet<String> = IndexSet::new();
        let mut linked: IndexSet<String> = IndexSet::new();
        let mut pages: Vec<String> = Vec::with_capacity(self.pages.len());

        for page in &self.pages {
            let ctx = page.generate(&compilation, &self.hooks)?;
            inlined.extend(ctx.inlined_assets().map(str::to_string));
            linked.extend(scanner.linked_urls(&ctx.html));
            compilation.emit_asset(ctx.page.clone(), ctx.html);
            pages.push(ctx.page);
        }

        for asset in &inlined {
            let url = format!("{}{}", compilation.public_path(), asset);
            if linked.contains(&url) {
                debug!(asset = %asset, "inlined asset is still linked, keeping it");
            } else if compilation.assets().remove(asset).is_some() {
                debug!(asset = %asset, "dropped inlined asset");
            }
        }

        info!(
            pages = pages.len(),
            assets = compilation.assets().len(),
            "compilation finished"
        );

        Ok(BuildOutput::from_compilation(&compilation))
    }

    /// Compile and write the result to the output directory.
    pub fn run(&self) -> Result<BuildOutput> {
        let output = self.compile()?;
        output.write_to(&self.options.resolved_output_dir(), self.options.clean)?;
        Ok(output)
    }

    fn check_stage(&self) -> Result<()> {
        if self.pages.is_empty() {
            if let Some(first) = self.hooks.plugin_names().into_iter().next() {
                return Err(Error::NoPages {
                    plugin: first.into_owned(),
                });
            }
        }
        Ok(())
    }
}
