use indexmap::IndexSet;

use crate::chunk::Chunk;
use crate::html::tags::AssetTags;

/// The in-flight record for one page, threaded through every registered
/// plugin in order.
///
/// `tags` is final once the `alter_asset_tags` hooks have run; `html` holds
/// the rendered markup during `after_html_processing`.
#[derive(Debug, Clone)]
pub struct HtmlGenerationContext {
    /// Output filename of the page being generated.
    pub page: String,
    pub public_path: String,
    /// Chunks selected for this page, in compilation order.
    pub chunks: Vec<Chunk>,
    pub tags: AssetTags,
    pub html: String,
    inlined: IndexSet<String>,
}

impl HtmlGenerationContext {
    pub fn new(
        page: impl Into<String>,
        public_path: impl Into<String>,
        chunks: Vec<Chunk>,
        tags: AssetTags,
    ) -> Self {
        Self {
            page: page.into(),
            public_path: public_path.into(),
            chunks,
            tags,
            html: String::new(),
            inlined: IndexSet::new(),
        }
    }

    /// URL the page uses to reference an asset.
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}{}", self.public_path, file)
    }

    /// Record that an asset's content now lives inside this page's markup.
    ///
    /// Returns `false` if the asset was already recorded.
    pub fn mark_inlined(&mut self, asset: impl Into<String>) -> bool {
        self.inlined.insert(asset.into())
    }

    pub fn is_inlined(&self, asset: &str) -> bool {
        self.inlined.contains(asset)
    }

    pub fn inlined_assets(&self) -> impl Iterator<Item = &str> {
        self.inlined.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_inlined_once() {
        let mut ctx = HtmlGenerationContext::new("index.html", "", vec![], AssetTags::default());
        assert!(ctx.mark_inlined("styles.css"));
        assert!(!ctx.mark_inlined("styles.css"));
        assert!(ctx.is_inlined("styles.css"));
        assert_eq!(ctx.inlined_assets().collect::<Vec<_>>(), vec!["styles.css"]);
    }

    #[test]
    fn test_asset_url() {
        let ctx = HtmlGenerationContext::new("index.html", "/assets/", vec![], AssetTags::default());
        assert_eq!(ctx.asset_url("styles.css"), "/assets/styles.css");
    }
}
