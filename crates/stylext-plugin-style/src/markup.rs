//! Regex-based scanning of rendered page markup.
//!
//! Only the shapes a generated page contains are recognised: `<link>` tags
//! with quoted or bare attribute values and the `<head>` / `<body>` element
//! boundaries.

use std::ops::Range;

use regex::Regex;
use stylext_config::StylePosition;

#[derive(Debug, Clone)]
pub(crate) struct Markup {
    link: Regex,
    attribute: Regex,
    head_open: Regex,
    head_close: Regex,
    body_open: Regex,
    body_close: Regex,
}

impl Markup {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            link: Regex::new(r"(?i)<link\b[^>]*>")?,
            attribute: Regex::new(
                r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#,
            )?,
            head_open: Regex::new(r"(?i)<head\b[^>]*>")?,
            head_close: Regex::new(r"(?i)</head\s*>")?,
            body_open: Regex::new(r"(?i)<body\b[^>]*>")?,
            body_close: Regex::new(r"(?i)</body\s*>")?,
        })
    }

    /// Byte range of the first `<link rel="stylesheet">` whose href is `href`.
    pub(crate) fn find_stylesheet_link(&self, html: &str, href: &str) -> Option<Range<usize>> {
        self.link.find_iter(html).find_map(|m| {
            // Skip the leading "<link" so the tag name is not read as an attribute.
            let attrs = &m.as_str()[5..];
            let mut rel_stylesheet = false;
            let mut href_matches = false;

            for caps in self.attribute.captures_iter(attrs) {
                let Some(name) = caps.get(1) else { continue };
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map(|v| decode_entities(v.as_str()))
                    .unwrap_or_default();

                match name.as_str().to_ascii_lowercase().as_str() {
                    "rel" => {
                        rel_stylesheet = value
                            .split_ascii_whitespace()
                            .any(|token| token.eq_ignore_ascii_case("stylesheet"));
                    }
                    "href" => href_matches = value == href,
                    _ => {}
                }
            }

            (rel_stylesheet && href_matches).then(|| m.range())
        })
    }

    /// Insertion offset for a `<style>` block, or `None` when the page lacks
    /// the element the position refers to.
    pub(crate) fn anchor(&self, html: &str, position: StylePosition) -> Option<usize> {
        match position {
            StylePosition::Plugin => None,
            StylePosition::HeadTop => self.head_open.find(html).map(|m| m.end()),
            StylePosition::HeadBottom => self.head_close.find(html).map(|m| m.start()),
            StylePosition::BodyTop => self.body_open.find(html).map(|m| m.end()),
            StylePosition::BodyBottom => self.body_close.find(html).map(|m| m.start()),
        }
    }
}

/// Widen `range` to its whole line when the tag is alone on it, so removing
/// a link does not leave a blank line behind.
pub(crate) fn removal_span(html: &str, range: Range<usize>) -> Range<usize> {
    let bytes = html.as_bytes();
    let is_blank = |b: u8| b == b' ' || b == b'\t';

    let mut start = range.start;
    while start > 0 && is_blank(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = range.end;
    while end < bytes.len() && is_blank(bytes[end]) {
        end += 1;
    }

    let starts_line = start == 0 || bytes[start - 1] == b'\n';
    let ends_line = end < bytes.len() && bytes[end] == b'\n';
    if starts_line && ends_line {
        start..end + 1
    } else {
        range
    }
}

fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
