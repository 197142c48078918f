//! Conversion of CLI errors into miette reports.

use miette::Report;
use stylext_config::ConfigError;
use stylext_plugin_script::ScriptError;
use stylext_plugin_style::StyleError;

use crate::error::{BuildError, CliError};

/// Convert a [`CliError`] into a report with a help line where one applies.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Build(e) => build_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path, relative paths resolve against the config file's directory",
            "File not found: {}",
            path.display()
        ),
        other => miette::miette!("{}", other),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    let help = match &err {
        ConfigError::NotFound(_) => {
            Some("Create a stylext.toml in the project root or pass --config <path>".to_string())
        }
        ConfigError::ProfileNotFound(name) => {
            Some(format!("Add a [profiles.{name}] table or drop --profile"))
        }
        ConfigError::NoChunks => Some("Add at least one [[chunks]] entry".to_string()),
        ConfigError::UnknownChunk { .. } => {
            Some("Chunk filters must name chunks declared under [[chunks]]".to_string())
        }
        ConfigError::SourceNotFound(_) | ConfigError::TemplateNotFound(_) => {
            Some("Paths resolve against the directory containing the config file".to_string())
        }
        _ => None,
    };

    match help {
        Some(help) => miette::miette!(help = help, "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}

fn build_error_to_miette(err: BuildError) -> Report {
    let help = match &err {
        BuildError::Compile(stylext_core::Error::NoPages { .. }) => {
            Some("Add a [[pages]] entry so plugins have a page to work on")
        }
        BuildError::Style(StyleError::InvalidPattern { .. }) => {
            Some("css_pattern must be a valid regular expression")
        }
        BuildError::Script(ScriptError::InvalidPattern { .. }) => {
            Some("Script attribute patterns must be valid regular expressions")
        }
        _ => None,
    };

    match help {
        Some(help) => miette::miette!(help = help, "Build error: {}", err),
        None => miette::miette!("Build error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_has_help() {
        let report = cli_error_to_miette(ConfigError::NotFound(PathBuf::from("site")).into());
        assert!(report.to_string().contains("no stylext.toml or stylext.json found in site"));
        assert!(report.help().is_some());
    }

    #[test]
    fn test_plain_errors_pass_through() {
        let report = cli_error_to_miette(CliError::InvalidArgument("boom".to_string()));
        assert_eq!(report.to_string(), "Invalid argument: boom");
        assert!(report.help().is_none());
    }

    #[test]
    fn test_missing_pages_has_help() {
        let err = stylext_core::Error::NoPages {
            plugin: "style-ext-html".to_string(),
        };
        let report = cli_error_to_miette(err.into());
        assert!(report.help().unwrap().to_string().contains("[[pages]]"));
    }

    #[test]
    fn test_registration_errors_have_no_pages_hint() {
        let err = stylext_core::Error::Registration {
            plugin: "legacy".to_string(),
            reason: "plugin targets hook API v0, but this compiler provides v1".to_string(),
        };
        let report = cli_error_to_miette(err.into());
        assert!(report.to_string().contains("hook API v0"));
        assert!(report.help().is_none());
    }

    #[test]
    fn test_style_help_only_for_bad_pattern() {
        let bad = regex::Regex::new("(").unwrap_err();
        let pattern = StyleError::InvalidPattern {
            pattern: "(".to_string(),
            source: bad.clone(),
        };
        let report = cli_error_to_miette(pattern.into());
        assert!(report.help().unwrap().to_string().contains("css_pattern"));

        let report = cli_error_to_miette(StyleError::Markup(bad).into());
        assert!(report.help().is_none());
    }
}
