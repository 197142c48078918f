use serde::{Deserialize, Serialize};

use crate::helpers::{default_css_pattern, default_true};

/// A plugin entry. Plugins are registered in the order they are listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PluginOptions {
    /// Inline extracted stylesheets into `<style>` tags
    StyleInline(StyleInlineOptions),

    /// Add `async` / `defer` / `type="module"` to script tags
    ScriptAttributes(ScriptAttributeOptions),
}

/// Where an inlined `<style>` block is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePosition {
    /// Where the `<link>` tag was
    #[default]
    Plugin,
    HeadTop,
    HeadBottom,
    BodyTop,
    BodyBottom,
}

/// Options for the style inliner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleInlineOptions {
    /// Disabled instances leave every page untouched (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Chunks whose stylesheets are inlined. Absent or empty means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<String>>,

    /// Only inline this stylesheet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Regex a filename must match to count as a stylesheet
    #[serde(default = "default_css_pattern")]
    pub css_pattern: String,

    #[serde(default)]
    pub position: StylePosition,

    /// Minify inlined CSS with lightningcss
    #[serde(default)]
    pub minify: bool,
}

impl Default for StyleInlineOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            chunks: None,
            file: None,
            css_pattern: default_css_pattern(),
            position: StylePosition::Plugin,
            minify: false,
        }
    }
}

impl StyleInlineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunks<I, S>(mut self, chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chunks = Some(chunks.into_iter().map(Into::into).collect());
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn css_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.css_pattern = pattern.into();
        self
    }

    pub fn position(mut self, position: StylePosition) -> Self {
        self.position = position;
        self
    }

    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Loading attribute for a script tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptAttribute {
    #[default]
    Sync,
    Async,
    Defer,
}

/// Options for the script attribute plugin.
///
/// Pattern lists are regexes matched against the script `src`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptAttributeOptions {
    #[serde(default)]
    pub default_attribute: ScriptAttribute,

    #[serde(default)]
    pub sync: Vec<String>,

    #[serde(default, rename = "async")]
    pub async_scripts: Vec<String>,

    #[serde(default)]
    pub defer: Vec<String>,

    /// Scripts that get `type="module"`
    #[serde(default)]
    pub module: Vec<String>,
}

impl ScriptAttributeOptions {
    pub fn new(default_attribute: ScriptAttribute) -> Self {
        Self {
            default_attribute,
            ..Self::default()
        }
    }

    pub fn sync(mut self, pattern: impl Into<String>) -> Self {
        self.sync.push(pattern.into());
        self
    }

    pub fn async_script(mut self, pattern: impl Into<String>) -> Self {
        self.async_scripts.push(pattern.into());
        self
    }

    pub fn defer(mut self, pattern: impl Into<String>) -> Self {
        self.defer.push(pattern.into());
        self
    }

    pub fn module(mut self, pattern: impl Into<String>) -> Self {
        self.module.push(pattern.into());
        self
    }
}
