//! HTML page generation.

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::Result;
use crate::chunk::Chunk;
use crate::compilation::Compilation;
use crate::hooks::HtmlHooks;
use crate::html::context::HtmlGenerationContext;
use crate::html::tags::{AssetTags, HtmlTag};
use crate::html::template::{self, DEFAULT_TEMPLATE, TemplateVars};

/// Options for one generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPageOptions {
    /// Output filename (default: "index.html")
    pub filename: String,

    /// Chunks whose assets are injected. `None` injects every chunk.
    pub chunks: Option<Vec<String>>,

    pub title: String,

    /// Value of the `lang` attribute on `<html>` (default: "en")
    pub lang: String,

    /// Template source. Uses [`DEFAULT_TEMPLATE`] when absent.
    pub template: Option<String>,
}

impl Default for HtmlPageOptions {
    fn default() -> Self {
        Self {
            filename: "index.html".to_string(),
            chunks: None,
            title: "Stylext App".to_string(),
            lang: "en".to_string(),
            template: None,
        }
    }
}

impl HtmlPageOptions {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn chunks<I, S>(mut self, chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chunks = Some(chunks.into_iter().map(Into::into).collect());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn template(mut self, source: impl Into<String>) -> Self {
        self.template = Some(source.into());
        self
    }
}

/// Generates one HTML page per compilation pass.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    options: HtmlPageOptions,
}

impl HtmlPage {
    pub fn new(options: HtmlPageOptions) -> Self {
        Self { options }
    }

    pub fn filename(&self) -> &str {
        &self.options.filename
    }

    pub fn options(&self) -> &HtmlPageOptions {
        &self.options
    }

    /// Chunks injected into this page, in compilation order.
    ///
    /// Filter entries that name no chunk are ignored with a warning.
    pub fn select_chunks(&self, compilation: &Compilation) -> Vec<Chunk> {
        let Some(filter) = &self.options.chunks else {
            return compilation.chunks().cloned().collect();
        };

        let filter: IndexSet<&str> = filter.iter().map(String::as_str).collect();
        for name in &filter {
            if compilation.chunk(name).is_none() {
                warn!(page = %self.options.filename, chunk = %name, "page references unknown chunk");
            }
        }

        compilation
            .chunks()
            .filter(|chunk| filter.contains(chunk.name.as_str()))
            .cloned()
            .collect()
    }

    /// Stylesheet links go in the head, scripts at the end of the body.
    pub fn asset_tags(&self, compilation: &Compilation, chunks: &[Chunk]) -> AssetTags {
        let public_path = compilation.public_path();
        let mut tags = AssetTags::default();

        for chunk in chunks {
            for file in chunk.css_files() {
                tags.head
                    .push(HtmlTag::stylesheet(format!("{}{}", public_path, file)));
            }
            for file in chunk.js_files() {
                tags.body.push(HtmlTag::script(format!("{}{}", public_path, file)));
            }
        }

        tags
    }

    /// Build the page, running every hook of `hooks` over it.
    ///
    /// Returns the context after the last hook; its `html` field is the
    /// final markup.
    pub fn generate(
        &self,
        compilation: &Compilation,
        hooks: &HtmlHooks,
    ) -> Result<HtmlGenerationContext> {
        let chunks = self.select_chunks(compilation);
        let tags = self.asset_tags(compilation, &chunks);
        let mut ctx = HtmlGenerationContext::new(
            self.options.filename.clone(),
            compilation.public_path(),
            chunks,
            tags,
        );

        hooks.run_alter_asset_tags(&mut ctx, compilation)?;

        let source = self.options.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
        ctx.html = template::render(
            source,
            TemplateVars {
                filename: &self.options.filename,
                title: &self.options.title,
                lang: &self.options.lang,
                chunks: ctx.chunks.iter().map(|chunk| chunk.name.as_str()).collect(),
                tags: &ctx.tags,
            },
        )?;

        hooks.run_after_html_processing(&mut ctx, compilation)?;

        debug!(
            page = %ctx.page,
            bytes = ctx.html.len(),
            inlined = ctx.inlined_assets().count(),
            "generated page"
        );

        Ok(ctx)
    }
}
