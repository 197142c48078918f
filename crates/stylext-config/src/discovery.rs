//! File-based config discovery for CLI use
//!
//! Sources are layered with figment, later ones winning:
//! built-in defaults, the config file, then `STYLEXT_` environment variables
//! (`__` separates nested keys, e.g. `STYLEXT_OUTPUT__DIR=public`).

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use tracing::debug;

use crate::config::StylextConfig;
use crate::error::{ConfigError, Result};

const CONFIG_FILES: [&str; 2] = ["stylext.toml", "stylext.json"];

/// File-based configuration discovery
///
/// Library users should build a [`StylextConfig`] directly or use
/// [`StylextConfig::from_value`].
///
/// # Example
///
/// ```no_run
/// use stylext_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// `stylext.toml` is preferred over `stylext.json`.
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<StylextConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        self.load_from(&path)
    }

    /// Load config and apply a profile
    pub fn load_with_profile(&self, profile: &str) -> Result<StylextConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<StylextConfig> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let figment = Figment::from(Serialized::defaults(StylextConfig::default()));
        let figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };

        debug!(path = %path.display(), "loading config");

        figment
            .merge(Env::prefixed("STYLEXT_").split("__"))
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: path.display().to_string(),
                hint: e.to_string(),
            })
    }
}

/// Discover and load the config in `root`
pub fn discover(root: impl AsRef<Path>) -> Result<StylextConfig> {
    ConfigDiscovery::new(root).load()
}

/// Discover, load and apply `profile`
pub fn discover_with_profile(root: impl AsRef<Path>, profile: &str) -> Result<StylextConfig> {
    ConfigDiscovery::new(root).load_with_profile(profile)
}
