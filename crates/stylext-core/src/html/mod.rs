//! HTML generation stage.
//!
//! ```text
//! chunks -> AssetTags -> alter_asset_tags hooks -> template -> after_html_processing hooks
//! ```

mod context;
mod links;
mod page;
mod tags;
pub mod template;

pub use context::HtmlGenerationContext;
pub(crate) use links::LinkScanner;
pub use page::{HtmlPage, HtmlPageOptions};
pub use tags::{AssetTags, HtmlTag};
pub use template::DEFAULT_TEMPLATE;
