//! Inline extracted stylesheets into generated HTML pages.
//!
//! [`StyleExtHtmlPlugin`] runs after a page has been rendered. For every
//! selected chunk it looks up the chunk's stylesheet assets, finds the
//! `<link rel="stylesheet">` tag that references each one, and replaces it
//! with a `<style>` block holding the stylesheet's text.
//!
//! # Example
//!
//! ```no_run
//! use stylext_config::{StyleInlineOptions, StylePosition};
//! use stylext_core::{ChunkSource, Compiler, CompilerOptions, HtmlPageOptions};
//! use stylext_plugin_style::StyleExtHtmlPlugin;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut compiler = Compiler::new(CompilerOptions::new("."));
//! compiler
//!     .chunk(ChunkSource::new("main").script("index.js").style("main.css"))
//!     .page(HtmlPageOptions::new("index.html"));
//! compiler.plugin(StyleExtHtmlPlugin::new(
//!     StyleInlineOptions::new().position(StylePosition::HeadBottom),
//! )?)?;
//!
//! let output = compiler.run()?;
//! println!("wrote {} files", output.assets.len());
//! # Ok(())
//! # }
//! ```
//!
//! Several instances may be registered, each restricted to some chunks.
//! When filters overlap, the instance registered first inlines the shared
//! stylesheet and later ones skip it.

mod error;
mod markup;
mod minify;

use std::borrow::Cow;

use regex::Regex;
use rustc_hash::FxHashSet;
use stylext_core::{Compilation, HookUsage, HtmlGenerationContext, HtmlPlugin};
use tracing::{debug, warn};

pub use error::StyleError;
pub use stylext_config::{StyleInlineOptions, StylePosition};

use markup::{Markup, removal_span};

/// Replaces stylesheet links with inline `<style>` blocks.
#[derive(Debug, Clone)]
pub struct StyleExtHtmlPlugin {
    options: StyleInlineOptions,
    /// `None` selects every chunk
    chunks: Option<FxHashSet<String>>,
    css_pattern: Regex,
    markup: Markup,
}

impl StyleExtHtmlPlugin {
    /// Build an inliner from its options.
    ///
    /// An empty chunk list is treated the same as no list.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidPattern`] if `css_pattern` is not a valid
    /// regular expression.
    pub fn new(options: StyleInlineOptions) -> Result<Self, StyleError> {
        let css_pattern =
            Regex::new(&options.css_pattern).map_err(|source| StyleError::InvalidPattern {
                pattern: options.css_pattern.clone(),
                source,
            })?;

        let chunks = options
            .chunks
            .as_ref()
            .filter(|names| !names.is_empty())
            .map(|names| names.iter().cloned().collect());

        Ok(Self {
            options,
            chunks,
            css_pattern,
            markup: Markup::new()?,
        })
    }

    pub fn options(&self) -> &StyleInlineOptions {
        &self.options
    }

    fn selects_chunk(&self, name: &str) -> bool {
        self.chunks
            .as_ref()
            .is_none_or(|chunks| chunks.contains(name))
    }

    fn selects_file(&self, file: &str) -> bool {
        self.css_pattern.is_match(file)
            && self
                .options
                .file
                .as_deref()
                .is_none_or(|wanted| wanted == file)
    }

    fn style_block(&self, file: &str, css: &str) -> String {
        if !self.options.minify {
            return format!("<style>{css}</style>");
        }

        match minify::minify_css(file, css) {
            Ok(minified) => format!("<style>{minified}</style>"),
            Err(err) => {
                warn!(file, error = %err, "inlining unminified CSS");
                format!("<style>{css}</style>")
            }
        }
    }

    /// Swap the link for `file` with `style`. Returns `false` and leaves the
    /// markup alone when the link or the insertion point is missing.
    fn replace_link(&self, html: &mut String, href: &str, style: &str) -> bool {
        let Some(link) = self.markup.find_stylesheet_link(html, href) else {
            return false;
        };

        if self.options.position == StylePosition::Plugin {
            html.replace_range(link, style);
            return true;
        }

        let Some(anchor) = self.markup.anchor(html, self.options.position) else {
            return false;
        };
        let removal = removal_span(html, link);

        let rewritten = if anchor <= removal.start {
            [
                &html[..anchor],
                style,
                &html[anchor..removal.start],
                &html[removal.end..],
            ]
            .concat()
        } else if anchor >= removal.end {
            [
                &html[..removal.start],
                &html[removal.end..anchor],
                style,
                &html[anchor..],
            ]
            .concat()
        } else {
            return false;
        };

        *html = rewritten;
        true
    }

    fn inline_page(&self, ctx: &mut HtmlGenerationContext, compilation: &Compilation) -> usize {
        let candidates: Vec<String> = ctx
            .chunks
            .iter()
            .filter(|chunk| self.selects_chunk(&chunk.name))
            .flat_map(|chunk| chunk.files.iter())
            .filter(|file| self.selects_file(file))
            .cloned()
            .collect();

        let mut inlined = 0;
        for file in candidates {
            if ctx.is_inlined(&file) {
                debug!(page = %ctx.page, file = %file, "already inlined by an earlier instance");
                continue;
            }

            let Some(asset) = compilation.assets().get(&file) else {
                debug!(page = %ctx.page, file = %file, "stylesheet asset not found, skipping");
                continue;
            };

            let href = ctx.asset_url(&file);
            let style = self.style_block(&file, asset.content());
            if !self.replace_link(&mut ctx.html, &href, &style) {
                debug!(page = %ctx.page, href = %href, "no matching stylesheet link");
                continue;
            }

            ctx.mark_inlined(file);
            inlined += 1;
        }

        inlined
    }
}

impl HtmlPlugin for StyleExtHtmlPlugin {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("style-ext-html")
    }

    fn hook_usage(&self) -> HookUsage {
        HookUsage::AFTER_HTML_PROCESSING
    }

    fn after_html_processing(
        &self,
        ctx: &mut HtmlGenerationContext,
        compilation: &Compilation,
    ) -> anyhow::Result<()> {
        if !self.options.enabled {
            return Ok(());
        }

        let count = self.inline_page(ctx, compilation);
        if count > 0 {
            debug!(page = %ctx.page, count, "inlined stylesheets");
        }
        Ok(())
    }
}
