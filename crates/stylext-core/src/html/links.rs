//! Finds the asset URLs a rendered page still loads.

use indexmap::IndexSet;
use regex::Regex;

#[derive(Debug, Clone)]
pub(crate) struct LinkScanner {
    raw_text: Regex,
    tag: Regex,
    url: Regex,
}

impl LinkScanner {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // Element text is never markup; script tags themselves are kept.
            raw_text: Regex::new(
                r"(?is)<style\b[^>]*>.*?</style\s*>|(<script\b[^>]*>).*?</script\s*>",
            )?,
            tag: Regex::new(r"(?i)<(?:link|script)\b[^>]*>")?,
            url: Regex::new(
                r#"(?i)\s(?:href|src)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#,
            )?,
        })
    }

    /// URLs referenced by `<link href>` and `<script src>` tags.
    pub(crate) fn linked_urls(&self, html: &str) -> IndexSet<String> {
        let markup = self.raw_text.replace_all(html, "$1");
        let mut urls = IndexSet::new();

        for tag in self.tag.find_iter(&markup) {
            for caps in self.url.captures_iter(tag.as_str()) {
                if let Some(value) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))
                {
                    urls.insert(decode_entities(value.as_str()));
                }
            }
        }

        urls
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

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(html: &str) -> Vec<String> {
        LinkScanner::new()
            .unwrap()
            .linked_urls(html)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_link_and_script_urls() {
        let html = r#"<link href="a.css" rel="stylesheet"><script type="module" src='b.js'></script><link rel=icon href=c.ico>"#;
        assert_eq!(urls(html), vec!["a.css", "b.js", "c.ico"]);
    }

    #[test]
    fn test_style_text_is_ignored() {
        let html = r#"<style>a[href="styles.css"] { color: red; }</style><a href="page.html">x</a>"#;
        assert!(urls(html).is_empty());
    }

    #[test]
    fn test_inline_script_text_is_ignored() {
        let html = r#"<script>document.write('<link href="x.css">')</script><script src="app.js"></script>"#;
        assert_eq!(urls(html), vec!["app.js"]);
    }

    #[test]
    fn test_attribute_names_must_match_exactly() {
        assert!(urls(r#"<link data-href="a.css">"#).is_empty());
        assert_eq!(urls(r#"<link HREF="a&amp;b.css">"#), vec!["a&b.css"]);
    }
}
