//! Top-level configuration structure and profile merging.
//!
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::options::{ChunkOptions, HtmlOptions, OutputOptions};
use crate::plugin::PluginOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylextConfig {
    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub chunks: Vec<ChunkOptions>,

    #[serde(default)]
    pub pages: Vec<HtmlOptions>,

    #[serde(default)]
    pub plugins: Vec<PluginOptions>,

    /// Named overrides, deep-merged over the rest of the config
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,
}

impl StylextConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use stylext_config::StylextConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "chunks": [{ "name": "main", "styles": ["styles.css"] }],
    ///     "plugins": [{ "kind": "style-inline" }]
    /// });
    ///
    /// let config = StylextConfig::from_value(value).unwrap();
    /// assert_eq!(config.chunks[0].name, "main");
    /// assert_eq!(config.plugins.len(), 1);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.to_string(),
        })
    }

    /// Parse a TOML document without discovery or environment overrides
    ///
    /// ```
    /// use stylext_config::StylextConfig;
    ///
    /// let config = StylextConfig::from_toml_str(r#"
    ///     [[chunks]]
    ///     name = "main"
    ///     styles = ["main.css"]
    /// "#).unwrap();
    /// assert_eq!(config.output.css_filename, "[name].css");
    /// ```
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        toml::from_str(source).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.message().to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.to_string(),
        })
    }

    /// Apply the named profile on top of this config.
    ///
    /// Objects merge key by key, arrays and scalars replace. `None` returns the
    /// config unchanged.
    pub fn materialize_profile(self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let overrides = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if overrides.is_null() {
            return Ok(self);
        }

        let profiles = self.profiles.clone();
        let mut base = serde_json::to_value(&self).map_err(|err| {
            ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            }
        })?;
        merge_values(&mut base, &overrides);

        let mut merged: StylextConfig = serde_json::from_value(base).map_err(|err| {
            ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            }
        })?;
        merged.profiles = profiles;
        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
