//! Tag model for the asset tags injected into generated pages.

use indexmap::IndexMap;
use std::fmt;

/// A single HTML element as injected by the page generator.
///
/// Attributes keep their insertion order. A `None` value renders as a bare
/// boolean attribute (`async`, `defer`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    pub tag_name: String,
    pub attributes: IndexMap<String, Option<String>>,
    pub void_tag: bool,
    pub inner_html: Option<String>,
}

impl HtmlTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            void_tag: false,
            inner_html: None,
        }
    }

    /// `<link href="..." rel="stylesheet">`
    pub fn stylesheet(href: impl Into<String>) -> Self {
        let mut tag = Self::new("link");
        tag.void_tag = true;
        tag.set_attribute("href", Some(href.into()));
        tag.set_attribute("rel", Some("stylesheet".to_string()));
        tag
    }

    /// `<script type="text/javascript" src="..."></script>`
    pub fn script(src: impl Into<String>) -> Self {
        let mut tag = Self::new("script");
        tag.set_attribute("type", Some("text/javascript".to_string()));
        tag.set_attribute("src", Some(src.into()));
        tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|value| value.as_deref())
    }

    /// Set an attribute. Existing attributes keep their position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Option<String>) {
        self.attributes.insert(name.into(), value);
    }

    pub fn is_script(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("script")
    }

    pub fn is_stylesheet_link(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("link")
            && self.attribute("rel").is_some_and(|rel| {
                rel.split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("stylesheet"))
            })
    }
}

impl fmt::Display for HtmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;
        for (name, value) in &self.attributes {
            match value {
                Some(value) => write!(f, " {}=\"{}\"", name, escape_attribute(value))?,
                None => write!(f, " {}", name)?,
            }
        }
        f.write_str(">")?;

        if self.void_tag {
            return Ok(());
        }

        if let Some(inner) = &self.inner_html {
            f.write_str(inner)?;
        }
        write!(f, "</{}>", self.tag_name)
    }
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Tags injected into a page, split by where they go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetTags {
    pub head: Vec<HtmlTag>,
    pub body: Vec<HtmlTag>,
}

impl AssetTags {
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut HtmlTag> {
        self.head.iter_mut().chain(self.body.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stylesheet() {
        let tag = HtmlTag::stylesheet("styles.css");
        assert_eq!(tag.to_string(), r#"<link href="styles.css" rel="stylesheet">"#);
        assert!(tag.is_stylesheet_link());
    }

    #[test]
    fn test_render_script_with_boolean_attribute() {
        let mut tag = HtmlTag::script("index_bundle.js");
        tag.set_attribute("async", None);
        assert_eq!(
            tag.to_string(),
            r#"<script type="text/javascript" src="index_bundle.js" async></script>"#
        );
        assert!(tag.is_script());
        assert!(!tag.is_stylesheet_link());
    }

    #[test]
    fn test_set_attribute_keeps_position() {
        let mut tag = HtmlTag::script("app.js");
        tag.set_attribute("type", Some("module".to_string()));
        assert_eq!(tag.to_string(), r#"<script type="module" src="app.js"></script>"#);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let tag = HtmlTag::stylesheet(r#"a"b&c.css"#);
        assert_eq!(tag.to_string(), r#"<link href="a&quot;b&amp;c.css" rel="stylesheet">"#);
    }

    #[test]
    fn test_alternate_stylesheet_rel() {
        let mut tag = HtmlTag::new("link");
        tag.set_attribute("rel", Some("alternate Stylesheet".to_string()));
        assert!(tag.is_stylesheet_link());
    }
}
