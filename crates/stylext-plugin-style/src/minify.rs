//! CSS minification through lightningcss.

use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};

use crate::error::StyleError;

pub(crate) fn minify_css(filename: &str, source: &str) -> Result<String, StyleError> {
    let minify_error = |message: String| StyleError::Minify {
        file: filename.to_string(),
        message,
    };

    let mut stylesheet = StyleSheet::parse(
        source,
        ParserOptions {
            filename: filename.to_string(),
            ..Default::default()
        },
    )
    .map_err(|e| minify_error(e.to_string()))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| minify_error(e.to_string()))?;

    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| minify_error(e.to_string()))?;

    Ok(result.code)
}
