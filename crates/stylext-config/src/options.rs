use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::helpers::{
    default_css_filename, default_html_filename, default_lang, default_output_dir,
    default_script_filename, default_title, default_true,
};

/// Where and how assets are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory, relative to the project root (default: "dist")
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Prefix for asset URLs in generated pages
    #[serde(default)]
    pub public_path: String,

    /// Remove the output directory before writing (default: true)
    #[serde(default = "default_true")]
    pub clean: bool,

    /// Script filename pattern, `[name]` is replaced by the chunk name
    #[serde(default = "default_script_filename")]
    pub filename: String,

    /// Stylesheet filename pattern
    #[serde(default = "default_css_filename")]
    pub css_filename: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            public_path: String::new(),
            clean: true,
            filename: default_script_filename(),
            css_filename: default_css_filename(),
        }
    }
}

/// One output chunk and the files it is assembled from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkOptions {
    pub name: String,

    #[serde(default)]
    pub scripts: Vec<PathBuf>,

    #[serde(default)]
    pub styles: Vec<PathBuf>,

    /// Overrides `output.filename` for this chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Overrides `output.css_filename` for this chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_filename: Option<String>,
}

/// HTML page generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Output filename for generated HTML (default: "index.html")
    #[serde(default = "default_html_filename")]
    pub filename: String,

    /// Chunks injected into this page; all chunks when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<String>>,

    /// Page title
    #[serde(default = "default_title")]
    pub title: String,

    /// Language attribute for <html> tag (default: "en")
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Path to a custom page template (minijinja syntax)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            filename: default_html_filename(),
            chunks: None,
            title: default_title(),
            lang: default_lang(),
            template: None,
        }
    }
}
