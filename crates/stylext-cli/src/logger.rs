//! Logging setup for the stylext CLI.
//!
//! Library crates emit `tracing` events; this module installs the subscriber
//! that prints them.
//!
//! ```rust,no_run
//! use stylext_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("starting build");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 5] = [
    "stylext_cli",
    "stylext_core",
    "stylext_config",
    "stylext_plugin_style",
    "stylext_plugin_script",
];

/// Directive string setting `level` for every stylext crate.
pub fn filter_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global tracing subscriber.
///
/// Level selection, first match wins:
/// 1. `--verbose`: debug for stylext crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for stylext crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(filter_directives("debug"))
    } else if quiet {
        EnvFilter::new(filter_directives("error"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives("info")))
    };

    init_logger_with_filter(filter, no_color);
}

/// Install the global subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_cover_every_crate() {
        let directives = filter_directives("debug");
        assert!(directives.starts_with("stylext_cli=debug,"));
        assert!(directives.contains("stylext_plugin_style=debug"));
        assert_eq!(directives.matches('=').count(), CRATES.len());
    }

    #[test]
    fn test_env_filter_accepts_directives() {
        let _filter = EnvFilter::new(filter_directives("error"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
