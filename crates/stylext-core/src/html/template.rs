//! Page template rendering.

use minijinja::{Environment, context};

use crate::Result;
use crate::html::tags::{AssetTags, HtmlTag};

/// Built-in page layout.
///
/// `head_tags` and `body_tags` are pre-rendered, one indented tag per line.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang|e }}">
  <head>
    <meta charset="UTF-8">
    <title>{{ title|e }}</title>
{{ head_tags }}  </head>
  <body>
{{ body_tags }}  </body>
</html>
"#;

// No file extension, so minijinja does not auto-escape the tag blocks.
const TEMPLATE_NAME: &str = "page";

pub(crate) struct TemplateVars<'a> {
    pub filename: &'a str,
    pub title: &'a str,
    pub lang: &'a str,
    pub chunks: Vec<&'a str>,
    pub tags: &'a AssetTags,
}

pub(crate) fn render(source: &str, vars: TemplateVars<'_>) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, source)?;

    let html = env.get_template(TEMPLATE_NAME)?.render(context! {
        filename => vars.filename,
        title => vars.title,
        lang => vars.lang,
        chunks => vars.chunks,
        head_tags => render_block(&vars.tags.head),
        body_tags => render_block(&vars.tags.body),
    })?;

    Ok(html)
}

fn render_block(tags: &[HtmlTag]) -> String {
    tags.iter().map(|tag| format!("    {}\n", tag)).collect()
}
