use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid css_pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to build markup matchers: {0}")]
    Markup(#[from] regex::Error),

    #[error("failed to minify {file}: {message}")]
    Minify { file: String, message: String },
}
