//! Loading attributes for injected script tags.
//!
//! [`ScriptExtHtmlPlugin`] edits the script tags of a page before it is
//! rendered: each `<script src>` gets `async`, `defer`, or nothing, and
//! scripts matching the `module` list get `type="module"`.
//!
//! ```
//! use stylext_plugin_script::{ScriptAttribute, ScriptAttributeOptions, ScriptExtHtmlPlugin};
//!
//! let plugin = ScriptExtHtmlPlugin::new(
//!     ScriptAttributeOptions::new(ScriptAttribute::Defer).sync("^polyfills"),
//! )
//! .unwrap();
//!
//! assert_eq!(plugin.attribute_for("polyfills.js"), ScriptAttribute::Sync);
//! assert_eq!(plugin.attribute_for("main.js"), ScriptAttribute::Defer);
//! ```

use std::borrow::Cow;

use regex::Regex;
use stylext_core::{Compilation, HookUsage, HtmlGenerationContext, HtmlPlugin};
use thiserror::Error;
use tracing::trace;

pub use stylext_config::{ScriptAttribute, ScriptAttributeOptions};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid {list} pattern '{pattern}': {source}")]
    InvalidPattern {
        list: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ScriptExtHtmlPlugin {
    default_attribute: ScriptAttribute,
    sync: Vec<Regex>,
    async_scripts: Vec<Regex>,
    defer: Vec<Regex>,
    module: Vec<Regex>,
}

impl ScriptExtHtmlPlugin {
    pub fn new(options: ScriptAttributeOptions) -> Result<Self, ScriptError> {
        Ok(Self {
            default_attribute: options.default_attribute,
            sync: compile("sync", &options.sync)?,
            async_scripts: compile("async", &options.async_scripts)?,
            defer: compile("defer", &options.defer)?,
            module: compile("module", &options.module)?,
        })
    }

    /// Loading attribute for a script `src`. Explicit lists are checked in
    /// the order sync, async, defer before falling back to the default.
    pub fn attribute_for(&self, src: &str) -> ScriptAttribute {
        [
            (&self.sync, ScriptAttribute::Sync),
            (&self.async_scripts, ScriptAttribute::Async),
            (&self.defer, ScriptAttribute::Defer),
        ]
        .into_iter()
        .find(|(patterns, _)| matches_any(patterns, src))
        .map_or(self.default_attribute, |(_, attribute)| attribute)
    }

    pub fn is_module(&self, src: &str) -> bool {
        matches_any(&self.module, src)
    }
}

fn compile(list: &'static str, patterns: &[String]) -> Result<Vec<Regex>, ScriptError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| ScriptError::InvalidPattern {
                list,
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

fn matches_any(patterns: &[Regex], src: &str) -> bool {
    patterns.iter().any(|re| re.is_match(src))
}

impl HtmlPlugin for ScriptExtHtmlPlugin {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("script-ext-html")
    }

    fn hook_usage(&self) -> HookUsage {
        HookUsage::ALTER_ASSET_TAGS
    }

    fn alter_asset_tags(
        &self,
        ctx: &mut HtmlGenerationContext,
        _compilation: &Compilation,
    ) -> anyhow::Result<()> {
        for tag in ctx.tags.iter_mut().filter(|tag| tag.is_script()) {
            let Some(src) = tag.attribute("src").map(str::to_string) else {
                continue;
            };

            let attribute = self.attribute_for(&src);
            match attribute {
                ScriptAttribute::Sync => {}
                ScriptAttribute::Async => tag.set_attribute("async", None),
                ScriptAttribute::Defer => tag.set_attribute("defer", None),
            }

            if self.is_module(&src) {
                tag.set_attribute("type", Some("module".to_string()));
            }

            trace!(src = %src, ?attribute, "script attributes set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylext_core::{AssetTags, HtmlTag};

    fn ctx_with(tags: AssetTags) -> HtmlGenerationContext {
        HtmlGenerationContext::new("index.html", "", Vec::new(), tags)
    }

    fn apply(options: ScriptAttributeOptions, tags: AssetTags) -> AssetTags {
        let mut ctx = ctx_with(tags);
        ScriptExtHtmlPlugin::new(options)
            .unwrap()
            .alter_asset_tags(&mut ctx, &Compilation::new())
            .unwrap();
        ctx.tags
    }

    #[test]
    fn test_default_async() {
        let tags = AssetTags {
            head: Vec::new(),
            body: vec![HtmlTag::script("index_bundle.js")],
        };
        let tags = apply(ScriptAttributeOptions::new(ScriptAttribute::Async), tags);
        assert_eq!(
            tags.body[0].to_string(),
            r#"<script type="text/javascript" src="index_bundle.js" async></script>"#
        );
    }

    #[test]
    fn test_pattern_precedence() {
        let plugin = ScriptExtHtmlPlugin::new(
            ScriptAttributeOptions::new(ScriptAttribute::Defer)
                .sync("vendor")
                .async_script("vendor|analytics")
                .defer("analytics"),
        )
        .unwrap();

        assert_eq!(plugin.attribute_for("vendor.js"), ScriptAttribute::Sync);
        assert_eq!(plugin.attribute_for("analytics.js"), ScriptAttribute::Async);
        assert_eq!(plugin.attribute_for("main.js"), ScriptAttribute::Defer);
    }

    #[test]
    fn test_module_type_and_stylesheets_untouched() {
        let tags = AssetTags {
            head: vec![HtmlTag::stylesheet("main.css")],
            body: vec![HtmlTag::script("app.mjs"), HtmlTag::script("legacy.js")],
        };
        let tags = apply(
            ScriptAttributeOptions::new(ScriptAttribute::Sync).module(r"\.mjs$"),
            tags,
        );

        assert_eq!(tags.head[0], HtmlTag::stylesheet("main.css"));
        assert_eq!(
            tags.body[0].to_string(),
            r#"<script type="module" src="app.mjs"></script>"#
        );
        assert_eq!(
            tags.body[1].to_string(),
            r#"<script type="text/javascript" src="legacy.js"></script>"#
        );
    }

    #[test]
    fn test_inline_script_without_src_is_skipped() {
        let mut inline = HtmlTag::new("script");
        inline.inner_html = Some("window.ready = true;".to_string());
        let tags = AssetTags {
            head: vec![inline.clone()],
            body: Vec::new(),
        };
        let tags = apply(ScriptAttributeOptions::new(ScriptAttribute::Async), tags);
        assert_eq!(tags.head[0], inline);
    }

    #[test]
    fn test_invalid_pattern_names_list() {
        let err = ScriptExtHtmlPlugin::new(ScriptAttributeOptions::default().defer("["))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid defer pattern '['"));
    }
}
